//! Shared sample hosts for engine tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use profilekit_model::{FieldTable, HostError, HostObject, Tag};

pub const PROFILE: Tag = Tag::new("profile");
pub const NETWORK: Tag = Tag::new("network");

/// A form with two profiles, `profile` and `network`.
///
/// `port` refuses anything that isn't numeric (or empty), and `proxy` is
/// declared with a `_var` suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub name: String,
    pub active: bool,
    pub notes: String,
    pub host: String,
    pub port: String,
    pub proxy: bool,
    pub fail_reads: bool,
}

impl Form {
    pub fn filled() -> Self {
        Self {
            name: "Ann".into(),
            active: true,
            notes: "first line only".into(),
            host: "relay.example.org".into(),
            port: "8443".into(),
            proxy: true,
            fail_reads: false,
        }
    }
}

fn set_port(f: &mut Form, v: String) -> Result<(), HostError> {
    if !v.chars().all(|c| c.is_ascii_digit()) {
        return Err(HostError::new(format!("port must be numeric, got {v:?}")));
    }
    f.port = v;
    Ok(())
}

fn get_host(f: &Form) -> Result<String, HostError> {
    if f.fail_reads {
        return Err(HostError::new("host field is not readable"));
    }
    Ok(f.host.clone())
}

impl HostObject for Form {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Form>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Form>::new()
                .text(
                    "name",
                    [PROFILE],
                    |f| Ok(f.name.clone()),
                    |f, v| {
                        f.name = v;
                        Ok(())
                    },
                )
                .boolean(
                    "active",
                    [PROFILE],
                    |f| Ok(f.active),
                    |f, v| {
                        f.active = v;
                        Ok(())
                    },
                )
                .text(
                    "notes",
                    [PROFILE],
                    |f| Ok(f.notes.clone()),
                    |f, v| {
                        f.notes = v;
                        Ok(())
                    },
                )
                .text(
                    "host",
                    [NETWORK],
                    get_host,
                    |f, v| {
                        f.host = v;
                        Ok(())
                    },
                )
                .text("port", [NETWORK], |f| Ok(f.port.clone()), set_port)
                .boolean(
                    "proxy_var",
                    [NETWORK],
                    |f| Ok(f.proxy),
                    |f, v| {
                        f.proxy = v;
                        Ok(())
                    },
                )
        })
    }
}

pub const MIXED: Tag = Tag::new("mixed");

/// A host with an unsupported field between supported ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mixed {
    pub title: String,
    pub enabled: bool,
    pub caption: String,
}

impl HostObject for Mixed {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Mixed>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Mixed>::new()
                .text(
                    "title",
                    [MIXED],
                    |m| Ok(m.title.clone()),
                    |m, v| {
                        m.title = v;
                        Ok(())
                    },
                )
                .boolean(
                    "enabled",
                    [MIXED],
                    |m| Ok(m.enabled),
                    |m, v| {
                        m.enabled = v;
                        Ok(())
                    },
                )
                .unsupported("volume", "Slider", [MIXED])
                .text(
                    "caption",
                    [MIXED],
                    |m| Ok(m.caption.clone()),
                    |m, v| {
                        m.caption = v;
                        Ok(())
                    },
                )
        })
    }
}

pub const PLAIN: Tag = Tag::new("plain");

/// A host whose field names contain the default record separator.
#[derive(Debug, Default)]
pub struct Questioning {
    pub why: String,
}

impl HostObject for Questioning {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Questioning>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Questioning>::new().text(
                "why?",
                [PLAIN],
                |q| Ok(q.why.clone()),
                |q, v| {
                    q.why = v;
                    Ok(())
                },
            )
        })
    }
}

pub const P: Tag = Tag::new("P");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub active: bool,
}

impl HostObject for Person {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Person>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Person>::new()
                .text(
                    "name",
                    [P],
                    |p| Ok(p.name.clone()),
                    |p, v| {
                        p.name = v;
                        Ok(())
                    },
                )
                .boolean(
                    "active",
                    [P],
                    |p| Ok(p.active),
                    |p, v| {
                        p.active = v;
                        Ok(())
                    },
                )
        })
    }
}

pub const GUARDED: Tag = Tag::new("guarded");

/// A host whose `code` field refuses to be emptied. It sits between two
/// ordinary fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guarded {
    pub label: String,
    pub code: String,
    pub armed: bool,
}

fn set_code(g: &mut Guarded, v: String) -> Result<(), HostError> {
    if v.is_empty() {
        return Err(HostError::new("code cannot be empty"));
    }
    g.code = v;
    Ok(())
}

impl HostObject for Guarded {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Guarded>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Guarded>::new()
                .text(
                    "label",
                    [GUARDED],
                    |g| Ok(g.label.clone()),
                    |g, v| {
                        g.label = v;
                        Ok(())
                    },
                )
                .text("code", [GUARDED], |g| Ok(g.code.clone()), set_code)
                .boolean(
                    "armed",
                    [GUARDED],
                    |g| Ok(g.armed),
                    |g, v| {
                        g.armed = v;
                        Ok(())
                    },
                )
        })
    }
}
