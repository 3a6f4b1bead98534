//! The project model: server groups, hosts, servers, users and JVM settings.
//!
//! Field tags are the names used in `whatunga.json` and in path expressions,
//! so the serde renames and the field tables below must agree. The
//! `test_field_tables_match_serialized_keys` test keeps them in sync.

use super::schema::{json_value, Field, ModelObject, NodeKind, NodeRef, Scalar};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the project file inside a project directory.
pub const PROJECT_FILE: &str = "whatunga.json";

const DEFAULT_PASSWORD: &str = "passw0rd_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Project {
    pub name: String,
    pub version: String,
    pub config: ProjectConfig,
    pub server_groups: Vec<ServerGroup>,
    pub hosts: Vec<Host>,
    pub users: Vec<User>,
}

impl Project {
    /// Creates an empty project with the default configuration block.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            config: ProjectConfig::default(),
            server_groups: Vec::new(),
            hosts: Vec::new(),
            users: Vec::new(),
        }
    }
}

const PROJECT_FIELDS: &[Field] = &[
    ("name", NodeKind::Scalar),
    ("version", NodeKind::Scalar),
    ("config", NodeKind::Object),
    ("server-groups", NodeKind::Collection),
    ("hosts", NodeKind::Collection),
    ("users", NodeKind::Collection),
];

impl ModelObject for Project {
    fn fields(&self) -> &'static [Field] {
        PROJECT_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        Some(match tag {
            "name" => NodeRef::Scalar(Scalar::String(&self.name)),
            "version" => NodeRef::Scalar(Scalar::String(&self.version)),
            "config" => NodeRef::Object(&self.config),
            "server-groups" => NodeRef::Collection(&self.server_groups),
            "hosts" => NodeRef::Collection(&self.hosts),
            "users" => NodeRef::Collection(&self.users),
            _ => return None,
        })
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

/// Global settings of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProjectConfig {
    pub templates: Templates,
    pub console_user: User,
    pub domain_user: User,
    pub docker_remote_api: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            templates: Templates::default(),
            console_user: User::new("admin", DEFAULT_PASSWORD),
            domain_user: User::new("dc", DEFAULT_PASSWORD),
            docker_remote_api: "unix:///var/run/docker.sock".to_string(),
        }
    }
}

const CONFIG_FIELDS: &[Field] = &[
    ("templates", NodeKind::Object),
    ("console-user", NodeKind::Object),
    ("domain-user", NodeKind::Object),
    ("docker-remote-api", NodeKind::Scalar),
];

impl ModelObject for ProjectConfig {
    fn fields(&self) -> &'static [Field] {
        CONFIG_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        Some(match tag {
            "templates" => NodeRef::Object(&self.templates),
            "console-user" => NodeRef::Object(&self.console_user),
            "domain-user" => NodeRef::Object(&self.domain_user),
            "docker-remote-api" => NodeRef::Scalar(Scalar::String(&self.docker_remote_api)),
            _ => return None,
        })
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

/// Locations of the configuration templates, relative to the project directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Templates {
    pub domain: String,
    pub host_master: String,
    pub host_slave: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            domain: "templates/domain.xml".to_string(),
            host_master: "templates/host-master.xml".to_string(),
            host_slave: "templates/host-slave.xml".to_string(),
        }
    }
}

const TEMPLATES_FIELDS: &[Field] = &[
    ("domain", NodeKind::Scalar),
    ("host-master", NodeKind::Scalar),
    ("host-slave", NodeKind::Scalar),
];

impl ModelObject for Templates {
    fn fields(&self) -> &'static [Field] {
        TEMPLATES_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        let value = match tag {
            "domain" => &self.domain,
            "host-master" => &self.host_master,
            "host-slave" => &self.host_slave,
            _ => return None,
        };
        Some(NodeRef::Scalar(Scalar::String(value)))
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ServerGroup {
    pub name: String,
    pub profile: String,
    pub socket_binding: String,
    pub jvm: Jvm,
    pub deployments: Vec<Deployment>,
}

impl ServerGroup {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

const SERVER_GROUP_FIELDS: &[Field] = &[
    ("name", NodeKind::Scalar),
    ("profile", NodeKind::Scalar),
    ("socket-binding", NodeKind::Scalar),
    ("jvm", NodeKind::Object),
    ("deployments", NodeKind::Collection),
];

impl ModelObject for ServerGroup {
    fn fields(&self) -> &'static [Field] {
        SERVER_GROUP_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        Some(match tag {
            "name" => NodeRef::Scalar(Scalar::String(&self.name)),
            "profile" => NodeRef::Scalar(Scalar::String(&self.profile)),
            "socket-binding" => NodeRef::Scalar(Scalar::String(&self.socket_binding)),
            "jvm" => NodeRef::Object(&self.jvm),
            "deployments" => NodeRef::Collection(&self.deployments),
            _ => return None,
        })
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Deployment {
    pub name: String,
    pub runtime_name: String,
    pub path: String,
}

const DEPLOYMENT_FIELDS: &[Field] = &[
    ("name", NodeKind::Scalar),
    ("runtime-name", NodeKind::Scalar),
    ("path", NodeKind::Scalar),
];

impl ModelObject for Deployment {
    fn fields(&self) -> &'static [Field] {
        DEPLOYMENT_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        let value = match tag {
            "name" => &self.name,
            "runtime-name" => &self.runtime_name,
            "path" => &self.path,
            _ => return None,
        };
        Some(NodeRef::Scalar(Scalar::String(value)))
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Host {
    pub name: String,
    #[serde(rename = "domain-controller")]
    pub dc: bool,
    pub servers: Vec<Server>,
    pub jvm: Jvm,
}

impl Host {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

const HOST_FIELDS: &[Field] = &[
    ("name", NodeKind::Scalar),
    ("domain-controller", NodeKind::Scalar),
    ("servers", NodeKind::Collection),
    ("jvm", NodeKind::Object),
];

impl ModelObject for Host {
    fn fields(&self) -> &'static [Field] {
        HOST_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        Some(match tag {
            "name" => NodeRef::Scalar(Scalar::String(&self.name)),
            "domain-controller" => NodeRef::Scalar(Scalar::Bool(self.dc)),
            "servers" => NodeRef::Collection(&self.servers),
            "jvm" => NodeRef::Object(&self.jvm),
            _ => return None,
        })
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Server {
    pub name: String,
    pub server_group: String,
    pub port_offset: i64,
    pub auto_start: bool,
    pub jvm: Jvm,
}

impl Server {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

const SERVER_FIELDS: &[Field] = &[
    ("name", NodeKind::Scalar),
    ("server-group", NodeKind::Scalar),
    ("port-offset", NodeKind::Scalar),
    ("auto-start", NodeKind::Scalar),
    ("jvm", NodeKind::Object),
];

impl ModelObject for Server {
    fn fields(&self) -> &'static [Field] {
        SERVER_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        Some(match tag {
            "name" => NodeRef::Scalar(Scalar::String(&self.name)),
            "server-group" => NodeRef::Scalar(Scalar::String(&self.server_group)),
            "port-offset" => NodeRef::Scalar(Scalar::Int(self.port_offset)),
            "auto-start" => NodeRef::Scalar(Scalar::Bool(self.auto_start)),
            "jvm" => NodeRef::Object(&self.jvm),
            _ => return None,
        })
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Jvm {
    pub name: String,
    pub heap: BoundedMemory,
    pub perm_gen: String,
    pub stack: String,
    pub options: Vec<String>,
}

const JVM_FIELDS: &[Field] = &[
    ("name", NodeKind::Scalar),
    ("heap", NodeKind::Object),
    ("perm-gen", NodeKind::Scalar),
    ("stack", NodeKind::Scalar),
    ("options", NodeKind::Scalar),
];

impl ModelObject for Jvm {
    fn fields(&self) -> &'static [Field] {
        JVM_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        Some(match tag {
            "name" => NodeRef::Scalar(Scalar::String(&self.name)),
            "heap" => NodeRef::Object(&self.heap),
            "perm-gen" => NodeRef::Scalar(Scalar::String(&self.perm_gen)),
            "stack" => NodeRef::Scalar(Scalar::String(&self.stack)),
            "options" => NodeRef::Scalar(Scalar::List(&self.options)),
            _ => return None,
        })
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

/// Initial and maximum size of a memory pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundedMemory {
    pub initial: String,
    pub max: String,
}

const BOUNDED_MEMORY_FIELDS: &[Field] = &[("initial", NodeKind::Scalar), ("max", NodeKind::Scalar)];

impl ModelObject for BoundedMemory {
    fn fields(&self) -> &'static [Field] {
        BOUNDED_MEMORY_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        let value = match tag {
            "initial" => &self.initial,
            "max" => &self.max,
            _ => return None,
        };
        Some(NodeRef::Scalar(Scalar::String(value)))
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "username")]
    pub name: String,
    pub password: String,
}

impl User {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

const USER_FIELDS: &[Field] = &[("username", NodeKind::Scalar), ("password", NodeKind::Scalar)];

impl ModelObject for User {
    fn fields(&self) -> &'static [Field] {
        USER_FIELDS
    }

    fn child(&self, tag: &str) -> Option<NodeRef<'_>> {
        let value = match tag {
            "username" => &self.name,
            "password" => &self.password,
            _ => return None,
        };
        Some(NodeRef::Scalar(Scalar::String(value)))
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn to_json(&self) -> Value {
        json_value(self)
    }
}
