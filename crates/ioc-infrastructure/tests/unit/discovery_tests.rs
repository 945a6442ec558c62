//! Link-time registrations shared by the infrastructure tests

use std::sync::{Arc, Mutex};

use ioc_application::ExecutionContext;
use ioc_domain::error::Error;
use ioc_domain::ports::{FactoryType, TaggedType};
use ioc_domain::value_objects::{Object, Requirement};
use ioc_infrastructure::discovery::{
    StaticDiscovery, WIRED_COMPONENTS, WIRERS, WiredComponentEntry, WirerEntry,
    list_wired_components, list_wirers,
};
use ioc_infrastructure::diagnostics::registrations_json;

pub trait IGreeting: Send + Sync {
    fn greet(&self) -> String;
}

pub trait IAnnouncer: Send + Sync {
    fn announce(&self) -> String;
}

pub trait IShout: Send + Sync {
    fn shout(&self) -> String;
}

ioc_domain::capability!(dyn IGreeting, dyn IAnnouncer, dyn IShout);

pub struct English;

impl IGreeting for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

ioc_domain::component!(English: dyn IGreeting);

pub struct French;

impl IGreeting for French {
    fn greet(&self) -> String {
        "bonjour".to_string()
    }
}

ioc_domain::component!(French: dyn IGreeting);

pub struct Announcer {
    greetings: Vec<Arc<dyn IGreeting>>,
}

impl IAnnouncer for Announcer {
    fn announce(&self) -> String {
        self.greetings
            .iter()
            .map(|greeting| greeting.greet())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

ioc_domain::component!(Announcer: dyn IAnnouncer);

pub struct Shout(Arc<dyn IGreeting>);

impl IShout for Shout {
    fn shout(&self) -> String {
        self.0.greet().to_uppercase()
    }
}

ioc_domain::component!(Shout: dyn IShout);

pub struct ShoutWirer;

#[linkme::distributed_slice(WIRED_COMPONENTS)]
static ANNOUNCER: WiredComponentEntry = WiredComponentEntry {
    name: "app::Announcer",
    tag: || {
        Ok(TaggedType::component::<Announcer, _>(
            vec![Requirement::collection::<dyn IGreeting>()],
            |args| {
                Ok(Announcer {
                    greetings: args.collection::<dyn IGreeting>(0)?,
                })
            },
        ))
    },
};

// Registered out of name order on purpose
#[linkme::distributed_slice(WIRED_COMPONENTS)]
static FRENCH: WiredComponentEntry = WiredComponentEntry {
    name: "app::French",
    tag: || Ok(TaggedType::component::<French, _>(Vec::new(), |_| Ok(French))),
};

#[linkme::distributed_slice(WIRED_COMPONENTS)]
static ENGLISH: WiredComponentEntry = WiredComponentEntry {
    name: "app::English",
    tag: || Ok(TaggedType::component::<English, _>(Vec::new(), |_| Ok(English))),
};

#[linkme::distributed_slice(WIRED_COMPONENTS)]
static BROKEN: WiredComponentEntry = WiredComponentEntry {
    name: "app::Broken",
    tag: || Err(Error::discovery("app::Broken could not be described")),
};

#[linkme::distributed_slice(WIRERS)]
static SHOUT_WIRER: WirerEntry = WirerEntry {
    name: "app::ShoutWirer",
    wirer: || {
        Ok(FactoryType::many::<ShoutWirer, dyn IShout, _>(
            "wire",
            vec![Requirement::collection::<dyn IGreeting>()],
            |args| {
                Ok(args
                    .collection::<dyn IGreeting>(0)?
                    .into_iter()
                    .map(|greeting| Object::new(Shout(greeting)))
                    .collect())
            },
        ))
    },
};

/// Test that registered entries are listed in name order
#[test]
fn test_entries_listed_by_name() {
    assert_eq!(
        list_wired_components(),
        vec!["app::Announcer", "app::Broken", "app::English", "app::French"]
    );
    assert_eq!(list_wirers(), vec!["app::ShoutWirer"]);
}

/// Test that collections follow the name order of the entries
#[test]
fn test_static_graph_resolves() {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    let context = ExecutionContext::new(StaticDiscovery::new())
        .with_wire_error_handler(move |error| sink.lock().expect("errors").push(error.to_string()));

    let announcer = context.resolve_one::<dyn IAnnouncer>().expect("announcer");
    assert_eq!(announcer.announce(), "hello, bonjour");

    let shouts: Vec<String> = context
        .resolve_all::<dyn IShout>()
        .expect("shouts")
        .iter()
        .map(|shout| shout.shout())
        .collect();
    assert_eq!(shouts, vec!["HELLO", "BONJOUR"]);

    let errors = errors.lock().expect("errors");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("app::Broken"));
}

/// Test that the registration table exports as JSON
#[test]
fn test_registrations_json() {
    let context = ExecutionContext::new(StaticDiscovery::new()).with_wire_error_handler(|_| {});
    let json = registrations_json(&context).expect("json");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let buckets = value.as_array().expect("array");
    assert_eq!(buckets.len(), 3);
    assert!(json.contains("IAnnouncer"));
    assert!(json.contains("IShout"));
}
