use hal_core::{LinkObject, LinkRelation, Resource};
use serde_json::{json, Value};

fn rel(name: &str) -> LinkRelation {
    LinkRelation::new(name).unwrap()
}

fn flatten(resource: &Resource) -> Value {
    Value::Object(resource.to_map())
}

#[test]
fn test_no_links_no_embeds() {
    let resource = Resource::new()
        .with_property("id", 1)
        .with_property("name", "first");

    assert_eq!(flatten(&resource), json!({ "id": 1, "name": "first" }));
}

#[test]
fn test_single_self_link_is_not_wrapped() {
    let mut resource = Resource::new();
    resource.add_link(&rel("self"), LinkObject::new("/orders/1"));

    let map = flatten(&resource);
    assert_eq!(map["_links"]["self"], json!({ "href": "/orders/1" }));
    assert!(map["_links"]["self"].is_object());
}

#[test]
fn test_two_links_keep_registration_order() {
    let item = rel("item");
    let mut resource = Resource::new();
    resource.add_link(&item, LinkObject::new("/items/2"));
    resource.add_link(&item, LinkObject::new("/items/1").with_title("first"));

    assert_eq!(
        flatten(&resource)["_links"]["item"],
        json!([
            { "href": "/items/2" },
            { "href": "/items/1", "title": "first" }
        ])
    );
    assert_eq!(resource.links("item").map(<[LinkObject]>::len), Some(2));
}

#[test]
fn test_forced_link_array() {
    let item = rel("item");
    let mut resource = Resource::new();
    resource.force_link_array(&item);
    resource.add_link(&item, LinkObject::new("/items/1"));

    assert_eq!(flatten(&resource)["_links"]["item"], json!([{ "href": "/items/1" }]));
}

#[test]
fn test_embedded_resources_are_flattened_recursively() {
    let mut first = Resource::new().with_property("id", 1).with_self_link("/items/1");
    let mut second = Resource::new().with_property("id", 2).with_self_link("/items/2");
    first.add_embedded(&rel("owner"), Resource::new().with_property("name", "ann"));
    second.add_link(&rel("next"), LinkObject::new("/items/3"));

    let items = rel("items");
    let mut collection = Resource::new()
        .with_property("total", 2)
        .with_self_link("/items");
    collection.add_embedded_all(&items, [first, second]);

    assert_eq!(
        flatten(&collection),
        json!({
            "total": 2,
            "_links": { "self": { "href": "/items" } },
            "_embedded": {
                "items": [
                    {
                        "id": 1,
                        "_links": { "self": { "href": "/items/1" } },
                        "_embedded": { "owner": { "name": "ann" } }
                    },
                    {
                        "id": 2,
                        "_links": {
                            "self": { "href": "/items/2" },
                            "next": { "href": "/items/3" }
                        }
                    }
                ]
            }
        })
    );
}

#[test]
fn test_forced_embedded_array() {
    let items = rel("items");
    let mut resource = Resource::new();
    resource.force_embedded_array(&items);
    resource.add_embedded(&items, Resource::new().with_property("id", 1));

    assert_eq!(flatten(&resource)["_embedded"]["items"], json!([{ "id": 1 }]));
}

#[test]
fn test_key_order_properties_links_embedded() {
    let mut resource = Resource::new();
    resource.add_embedded(&rel("child"), Resource::new());
    resource.add_self_link("/parent");
    resource.set_property("b", 1);
    resource.set_property("a", 2);

    let keys: Vec<String> = resource.to_map().keys().cloned().collect();
    assert_eq!(keys, ["b", "a", "_links", "_embedded"]);
}

#[test]
fn test_flattening_is_idempotent() {
    let mut resource = Resource::new().with_property("id", 9).with_self_link("/x/9");
    resource.add_embedded(&rel("part"), Resource::new().with_property("n", 1));

    let first = resource.to_map();
    let second = resource.to_map();
    assert_eq!(first, second);
}

#[test]
fn test_property_named_links_is_excluded() {
    let resource = Resource::new()
        .with_property("_links", json!({ "self": { "href": "/evil" } }))
        .with_property("id", 3);

    assert_eq!(flatten(&resource), json!({ "id": 3 }));
    // The raw property is still stored; only flattening drops it.
    assert!(resource.property("_links").is_some());
}

#[test]
fn test_curie_relations_declare_curies_first() {
    let acme = LinkObject::curie("acme", "https://docs.acme.com/rels/{rel}");
    let widgets = rel("widgets").with_curie_link(acme.clone()).unwrap();
    let gadgets = rel("gadgets").with_curie_link(acme).unwrap();

    let mut resource = Resource::new().with_self_link("/");
    resource.add_link(&widgets, LinkObject::new("/widgets"));
    resource.add_link(&gadgets, LinkObject::new("/gadgets"));

    let map = flatten(&resource);
    assert_eq!(
        map["_links"],
        json!({
            "curies": [
                { "href": "https://docs.acme.com/rels/{rel}", "templated": true, "name": "acme" }
            ],
            "self": { "href": "/" },
            "acme:widgets": { "href": "/widgets" },
            "acme:gadgets": { "href": "/gadgets" }
        })
    );
    let keys: Vec<&String> = map["_links"].as_object().unwrap().keys().collect();
    assert_eq!(keys[0], "curies");
}

#[test]
fn test_declared_curie_without_relation() {
    let mut resource = Resource::new();
    resource
        .add_curie(LinkObject::curie("ex", "/docs/{rel}"))
        .unwrap();

    assert_eq!(resource.curies().len(), 1);
    assert_eq!(
        flatten(&resource),
        json!({ "_links": { "curies": [{ "href": "/docs/{rel}", "templated": true, "name": "ex" }] } })
    );
}

#[test]
fn test_unnamed_curie_is_rejected() {
    let mut resource = Resource::new();
    assert!(resource.add_curie(LinkObject::new("/docs/{rel}")).is_err());
    assert!(resource.curies().is_empty());
}

#[test]
fn test_serialize_matches_to_map() {
    let resource = Resource::new().with_property("id", 1).with_self_link("/1");
    assert_eq!(serde_json::to_value(&resource).unwrap(), flatten(&resource));
}

#[test]
fn test_add_links_keeps_given_order() {
    let item = rel("item");
    let mut resource = Resource::new();
    resource.add_links(
        &item,
        [LinkObject::new("/items/b"), LinkObject::new("/items/a")],
    );

    assert_eq!(
        flatten(&resource)["_links"]["item"],
        json!([{ "href": "/items/b" }, { "href": "/items/a" }])
    );
    let hrefs: Vec<&str> = resource
        .links("item")
        .unwrap()
        .iter()
        .map(|link| link.href.as_str())
        .collect();
    assert_eq!(hrefs, ["/items/b", "/items/a"]);
}
