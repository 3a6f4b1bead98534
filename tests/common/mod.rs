//! Shared project fixture for the integration tests.

#![allow(dead_code)]

use whatunga::model::project::{
    BoundedMemory, Deployment, Host, Jvm, Project, Server, ServerGroup, User,
};

/// Two server groups, two hosts with three and one servers, one user.
pub fn test_project() -> Project {
    let mut project = Project::new("test", "1.0");

    let mut group0 = ServerGroup::named("server-group0");
    group0.profile = "profile0".to_string();
    group0.socket_binding = "socket-binding0".to_string();
    group0.jvm = Jvm {
        name: "server-group0-jvm".to_string(),
        heap: BoundedMemory {
            initial: "1GB".to_string(),
            max: "2GB".to_string(),
        },
        ..Jvm::default()
    };
    group0.deployments = vec![
        deployment("deployment0"),
        deployment("deployment1"),
    ];
    let mut group1 = ServerGroup::named("server-group1");
    group1.profile = "profile1".to_string();
    project.server_groups = vec![group0, group1];

    let mut host0 = Host::named("host0");
    host0.dc = true;
    for (position, offset) in [0, 50, 100].into_iter().enumerate() {
        let mut server = Server::named(format!("host0-server{}", position));
        server.server_group = "server-group0".to_string();
        server.port_offset = offset;
        server.auto_start = offset > 0;
        host0.servers.push(server);
    }
    host0.servers[2].jvm.options = vec!["-server".to_string(), "-Xss1m".to_string()];

    let mut host1 = Host::named("host1");
    let mut server = Server::named("host1-server0");
    server.server_group = "server-group1".to_string();
    host1.servers.push(server);
    project.hosts = vec![host0, host1];

    project.users = vec![User::new("admin", "admin")];
    project
}

fn deployment(name: &str) -> Deployment {
    Deployment {
        name: name.to_string(),
        runtime_name: format!("{}-rt", name),
        path: format!("/path/to/{}", name),
    }
}
