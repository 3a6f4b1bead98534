mod common;

use quickcheck::{QuickCheck, TestResult};
use serde_json::json;
use whatunga::model::project::Project;
use whatunga::model::schema::{NodeKind, NodeRef, Scalar};
use whatunga::path::{parse, resolve, PathError};

use common::test_project;

fn resolve_str<'a>(project: &'a Project, path: &str) -> Result<NodeRef<'a>, PathError> {
    resolve(project, &parse(path).unwrap())
}

#[test]
fn test_resolve_root() {
    let project = test_project();
    assert_eq!(resolve_str(&project, "").unwrap(), NodeRef::Object(&project));
}

#[test]
fn test_resolve_scalars() {
    let project = test_project();
    let cases = [
        ("name", json!("test")),
        ("version", json!("1.0")),
        ("config.templates.domain", json!("templates/domain.xml")),
        ("config.console-user.username", json!("admin")),
        ("server-groups[0].jvm.heap.max", json!("2GB")),
        ("hosts[0].domain-controller", json!(true)),
        ("hosts[host0].servers[1].port-offset", json!(50)),
        ("hosts[0].servers[2].jvm.options", json!(["-server", "-Xss1m"])),
        ("users[admin].password", json!("admin")),
    ];
    for (path, expected) in cases {
        let node = resolve_str(&project, path).unwrap();
        assert_eq!(node.kind(), NodeKind::Scalar, "{}", path);
        assert_eq!(node.to_json(), expected, "{}", path);
    }
}

#[test]
fn test_resolve_objects_and_elements() {
    let project = test_project();
    let templates = resolve_str(&project, "config.templates").unwrap();
    assert_eq!(templates.kind(), NodeKind::Object);

    let deployment = resolve_str(&project, "server-groups[server-group0].deployments[1]").unwrap();
    assert_eq!(deployment.as_object().unwrap().name(), Some("deployment1"));
    assert_eq!(deployment.to_json()["runtime-name"], json!("deployment1-rt"));
}

#[test]
fn test_named_index() {
    let project = test_project();
    assert_eq!(
        resolve_str(&project, "hosts[host1].name").unwrap(),
        NodeRef::Scalar(Scalar::String("host1"))
    );
}

#[test]
fn test_numeric_and_named_index_agree() {
    let project = test_project();
    assert_eq!(
        resolve_str(&project, "hosts[1].servers[0]").unwrap(),
        resolve_str(&project, "hosts[host1].servers[host1-server0]").unwrap()
    );
}

#[test]
fn test_bounds() {
    let project = test_project();
    assert_eq!(project.hosts.len(), 2);
    assert!(resolve_str(&project, "hosts[1]").is_ok());
    assert_eq!(
        resolve_str(&project, "hosts[2]"),
        Err(PathError::IndexOutOfBounds(
            "hosts[2]".to_string(),
            "hosts[2]".to_string()
        ))
    );
    assert_eq!(
        resolve_str(&project, "hosts[host9]"),
        Err(PathError::NamedIndexNotFound(
            "hosts[host9]".to_string(),
            "hosts[host9]".to_string()
        ))
    );
}

#[test]
fn test_leading_zeros_address_the_same_element() {
    let project = test_project();
    assert_eq!(
        resolve_str(&project, "hosts[01]").unwrap(),
        resolve_str(&project, "hosts[1]").unwrap()
    );
    assert_eq!(
        resolve_str(&project, "hosts[000].servers[0002].name").unwrap().to_json(),
        json!("host0-server2")
    );
}

#[test]
fn test_overlong_index_is_out_of_bounds() {
    let project = test_project();
    let path = "hosts[99999999999999999999999].name";
    assert_eq!(
        resolve_str(&project, path),
        Err(PathError::IndexOutOfBounds(
            path.to_string(),
            "hosts[99999999999999999999999]".to_string()
        ))
    );
}

#[test]
fn test_range_is_never_resolved() {
    let mut project = test_project();
    for path in [
        "server-groups[:].name",
        "server-groups[0:1]",
        "server-groups[01:].name",
        "hosts[0].servers[1:]",
    ] {
        assert!(
            matches!(resolve_str(&project, path), Err(PathError::RangeNotSupported(_, _))),
            "{}",
            path
        );
    }

    project.server_groups.clear();
    assert!(matches!(
        resolve_str(&project, "server-groups[:].name"),
        Err(PathError::RangeNotSupported(_, _))
    ));
}

#[test]
fn test_resolve_errors() {
    let project = test_project();
    assert_eq!(
        resolve_str(&project, "config.nope"),
        Err(PathError::UnknownSegment(
            "config.nope".to_string(),
            "nope".to_string()
        ))
    );
    assert_eq!(
        resolve_str(&project, "hosts.name"),
        Err(PathError::MissingIndex(
            "hosts.name".to_string(),
            "hosts".to_string()
        ))
    );
    assert_eq!(
        resolve_str(&project, "config[0]"),
        Err(PathError::WrongKind(
            "config[0]".to_string(),
            "config[0]".to_string()
        ))
    );
}

#[test]
fn test_resolve_error_messages() {
    let project = test_project();
    assert_eq!(
        resolve_str(&project, "config.nope").unwrap_err().to_string(),
        "Unable to resolve path \"config.nope\": Segment \"nope\" not found."
    );
    assert_eq!(
        resolve_str(&project, "hosts").unwrap_err().to_string(),
        "Unable to resolve path \"hosts\": Missing index given for collection \"hosts\"."
    );
}

#[test]
fn test_resolve_is_deterministic() {
    let project = test_project();
    for path in ["", "config", "hosts[0].servers[2].jvm", "users[0].username", "hosts[5]"] {
        assert_eq!(resolve_str(&project, path), resolve_str(&project, path), "{}", path);
    }
}

const PATHS: &[&str] = &[
    "",
    "name",
    "config",
    "config.templates",
    "config.templates.host-slave",
    "config.domain-user",
    "hosts[0]",
    "hosts[host1]",
    "servers[0]",
    "servers[host0-server2].jvm",
    "jvm.options",
    "jvm.heap",
    "heap.initial",
    "server-groups[1]",
    "deployments[deployment0].path",
    "users[0]",
    "port-offset",
    "hosts[7]",
    "nope",
];

#[test]
fn test_resolve_composes_with_append() {
    fn prop(first: usize, second: usize) -> TestResult {
        let project = test_project();
        let p = parse(PATHS[first % PATHS.len()]).unwrap();
        let q = parse(PATHS[second % PATHS.len()]).unwrap();

        let (Ok(whole), Ok(NodeRef::Object(intermediate))) =
            (resolve(&project, &p.append(&q)), resolve(&project, &p))
        else {
            return TestResult::discard();
        };
        match resolve(intermediate, &q) {
            Ok(stepwise) => TestResult::from_bool(whole == stepwise),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(300)
        .max_tests(5000)
        .quickcheck(prop as fn(usize, usize) -> TestResult);
}

#[test]
fn test_failed_composition_fails_both_ways() {
    let project = test_project();
    let p = parse("hosts[0]").unwrap();
    let q = parse("servers[9]").unwrap();
    assert!(resolve(&project, &p.append(&q)).is_err());
    let host = resolve(&project, &p).unwrap().as_object().unwrap();
    assert!(resolve(host, &q).is_err());
}
