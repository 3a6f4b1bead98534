//! Resolves paths against the project model.

use log::trace;

use super::ast::{Index, Path, Segment, SegmentKind};
use super::error::PathError;
use crate::model::schema::{elements, ModelCollection, ModelObject, NodeRef};

/// Walks `root` along `path` and returns the node it points to.
///
/// Resolution is purely observational: the model is only read, and resolving
/// the same path twice against an unchanged model yields the same node.
///
/// # Example
///
/// ```
/// use whatunga::model::project::{Host, Project};
/// use whatunga::model::schema::{NodeRef, Scalar};
/// use whatunga::path::{parse, resolve};
///
/// let mut project = Project::new("demo", "1.0");
/// project.hosts.push(Host::named("master"));
///
/// let path = parse("hosts[master].name").unwrap();
/// assert_eq!(
///     resolve(&project, &path).unwrap(),
///     NodeRef::Scalar(Scalar::String("master"))
/// );
/// assert!(resolve(&project, &parse("hosts[1]").unwrap()).is_err());
/// ```
pub fn resolve<'a>(root: &'a dyn ModelObject, path: &Path) -> Result<NodeRef<'a>, PathError> {
    path.segments()
        .iter()
        .try_fold(NodeRef::Object(root), |context, segment| {
            let next = step(context, segment, path)?;
            trace!("Resolved segment {} of {} to a {}", segment, path, next.kind());
            Ok(next)
        })
}

/// Applies one segment to `context`.
fn step<'a>(context: NodeRef<'a>, segment: &Segment, path: &Path) -> Result<NodeRef<'a>, PathError> {
    let fail = |error: fn(String, String) -> PathError| error(path.to_string(), segment.to_string());

    // Scalars and collections declare no tags, so descending past them ends here too.
    let child = context
        .child(segment.name())
        .ok_or_else(|| fail(PathError::UnknownSegment))?;

    match (child, segment.kind()) {
        (NodeRef::Object(_) | NodeRef::Scalar(_), SegmentKind::Plain) => Ok(child),
        (NodeRef::Object(_) | NodeRef::Scalar(_), _) => Err(fail(PathError::WrongKind)),
        (NodeRef::Collection(_), SegmentKind::Plain) => Err(fail(PathError::MissingIndex)),
        (NodeRef::Collection(_), SegmentKind::Range(_)) => Err(fail(PathError::RangeNotSupported)),
        (NodeRef::Collection(collection), SegmentKind::Index(index)) => {
            element(collection, index).map(NodeRef::Object).ok_or_else(|| match index {
                Index::Numeric(_) => fail(PathError::IndexOutOfBounds),
                Index::Named(_) => fail(PathError::NamedIndexNotFound),
            })
        }
    }
}

/// Picks an element by position or by name. Named lookups return the first match.
/// A position too large for `usize` is past the end of every collection.
fn element<'a>(collection: &'a dyn ModelCollection, index: &Index) -> Option<&'a dyn ModelObject> {
    match index {
        Index::Numeric(number) => number
            .value()
            .filter(|position| *position < collection.len())
            .and_then(|position| collection.element(position)),
        Index::Named(name) => elements(collection).find(|element| element.name() == Some(name.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::{Host, Project, Server};
    use crate::model::schema::Scalar;
    use crate::path::parser::parse;

    fn project() -> Project {
        let mut project = Project::new("test", "1.0");
        let mut host = Host::named("host0");
        host.servers.push(Server::named("server0"));
        host.servers.push(Server::named("server1"));
        project.hosts.push(host);
        project.hosts.push(Host::named("host1"));
        project
    }

    fn resolve_str<'a>(project: &'a Project, path: &str) -> Result<NodeRef<'a>, PathError> {
        resolve(project, &parse(path).unwrap())
    }

    #[test]
    fn test_resolve_root() {
        let project = project();
        assert_eq!(resolve_str(&project, "").unwrap(), NodeRef::Object(&project));
    }

    #[test]
    fn test_resolve_scalar() {
        let project = project();
        assert_eq!(
            resolve_str(&project, "name").unwrap(),
            NodeRef::Scalar(Scalar::String("test"))
        );
    }

    #[test]
    fn test_resolve_numeric_and_named_index() {
        let project = project();
        let by_position = resolve_str(&project, "hosts[0].servers[1]").unwrap();
        let by_name = resolve_str(&project, "hosts[host0].servers[server1]").unwrap();
        assert_eq!(by_position, by_name);
        assert_eq!(by_position.as_object().unwrap().name(), Some("server1"));
    }

    #[test]
    fn test_out_of_bounds() {
        let project = project();
        assert_eq!(
            resolve_str(&project, "hosts[2]").unwrap_err(),
            PathError::IndexOutOfBounds("hosts[2]".to_string(), "hosts[2]".to_string())
        );
    }

    #[test]
    fn test_index_on_scalar_is_wrong_kind() {
        let project = project();
        assert!(matches!(
            resolve_str(&project, "name[0]"),
            Err(PathError::WrongKind(_, _))
        ));
    }

    #[test]
    fn test_descending_past_scalar() {
        let project = project();
        assert_eq!(
            resolve_str(&project, "name.length").unwrap_err(),
            PathError::UnknownSegment("name.length".to_string(), "length".to_string())
        );
    }

    #[test]
    fn test_error_reports_offending_segment() {
        let project = project();
        let err = resolve_str(&project, "hosts[0].servers[7].name").unwrap_err();
        assert_eq!(err.segment(), Some("servers[7]"));
    }
}
