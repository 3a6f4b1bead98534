mod common;

use std::thread;

use serde_json::json;
use whatunga::model::project::Host;
use whatunga::path::{parse, PathError};
use whatunga::session::cursor::NavTarget;
use whatunga::session::{share, Session};

use common::test_project;

fn cd(session: &mut Session, arg: &str) -> Result<(), PathError> {
    session.navigate(&NavTarget::from_arg(arg)?)
}

#[test]
fn test_sessions_have_independent_cursors() {
    let project = share(test_project());
    let mut first = Session::new(project.clone());
    let mut second = Session::new(project);

    cd(&mut first, "hosts[host0]").unwrap();
    cd(&mut second, "config.templates").unwrap();

    assert_eq!(first.current().to_string(), "hosts[host0]");
    assert_eq!(second.current().to_string(), "config.templates");
}

#[test]
fn test_with_node_reads_absolute_paths() {
    let mut session = Session::new(share(test_project()));
    cd(&mut session, "hosts[1]").unwrap();

    let offset = session
        .with_node(&parse("hosts[0].servers[2].port-offset").unwrap(), |node| node.to_json())
        .unwrap();
    assert_eq!(offset, json!(100));
}

#[test]
fn test_with_node_reports_resolver_errors() {
    let session = Session::new(share(test_project()));
    let err = session
        .with_node(&parse("users[nobody]").unwrap(), |_| ())
        .unwrap_err();
    assert!(matches!(err, PathError::NamedIndexNotFound(_, _)));
}

#[test]
fn test_navigation_sees_changes_from_other_holders() {
    let project = share(test_project());
    let mut session = Session::new(project.clone());

    assert!(cd(&mut session, "hosts[host2]").is_err());
    project.write().hosts.push(Host::named("host2"));
    cd(&mut session, "hosts[host2]").unwrap();
    assert_eq!(session.current().to_string(), "hosts[host2]");
}

#[test]
fn test_sessions_on_separate_threads() {
    let project = share(test_project());

    let handles: Vec<_> = ["hosts[0]", "hosts[1]", "server-groups[0]", "users[0]"]
        .into_iter()
        .map(|target| {
            let project = project.clone();
            thread::spawn(move || {
                let mut session = Session::new(project);
                for _ in 0..50 {
                    cd(&mut session, target).unwrap();
                    cd(&mut session, "/").unwrap();
                }
                cd(&mut session, target).unwrap();
                session.current().to_string()
            })
        })
        .collect();

    let cursors: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(cursors, vec!["hosts[0]", "hosts[1]", "server-groups[0]", "users[0]"]);
}

#[test]
fn test_complete_through_session() {
    let mut session = Session::new(share(test_project()));
    cd(&mut session, "server-groups[server-group0]").unwrap();

    let completion = session.complete("deployments[dep", "ls deployments[dep");
    assert_eq!(completion.candidates, vec!["deployment0", "deployment1"]);
    assert_eq!(completion.terminator, None);
}
