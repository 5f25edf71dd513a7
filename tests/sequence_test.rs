use sequence::{Element, Elements, Value};

fn five_elements() -> Elements {
    let mut elements = Elements::new();
    for i in 0..5 {
        let mut e = Element::new();
        e.set("score", (i * 10) as f64);
        e.set("id", format!("test00{}", i));
        elements.push(e);
    }
    elements
}

fn ids(elements: &Elements) -> Vec<&str> {
    elements.iter().map(|e| e.get_string("id")).collect()
}

#[test]
fn test_unset_keys_default() {
    let e = Element::new();

    assert!(e.get("anything").is_none());
    assert_eq!(e.get_float64("anything"), 0.0);
    assert_eq!(e.get_string("anything"), "");
}

#[test]
fn test_set_then_get() {
    let mut e = Element::new();
    e.set("get_test", "This is a test");
    e.set("n", 1.5);

    assert_eq!(e.get("get_test"), Some(&Value::from("This is a test")));
    assert_eq!(e.get("n"), Some(&Value::Float64(1.5)));
}

#[test]
fn test_type_mismatch_fallback() {
    let mut e = Element::new();
    e.set("a", "text");
    e.set("b", 2.75);

    assert_eq!(e.get_float64("a"), 0.0);
    assert_eq!(e.get_string("b"), "");
}

#[test]
fn test_sort_by_float64_desc() {
    let mut elements = five_elements();
    elements.sort_by_float64_desc("score");

    assert_eq!(elements.len(), 5);
    assert_eq!(
        ids(&elements),
        vec!["test004", "test003", "test002", "test001", "test000"]
    );
}

#[test]
fn test_filter() {
    let elements = five_elements();

    let mut res = elements.filter(|e| e.get_float64("score") > 10.0);
    assert_eq!(res.len(), 3);
    assert_eq!(ids(&res), vec!["test002", "test003", "test004"]);

    res.sort_by_float64_desc("score");
    assert_eq!(ids(&res), vec!["test004", "test003", "test002"]);

    // source unchanged
    assert_eq!(elements, five_elements());
}

#[test]
fn test_map() {
    let mut elements = five_elements();

    let res = elements.map(|mut e| {
        let score = e.get_float64("score");
        e.set("score", score * 2.0);
        e
    });

    assert_eq!(res.len(), 5);
    let scores: Vec<f64> = res.iter().map(|e| e.get_float64("score")).collect();
    assert_eq!(scores, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    assert_eq!(
        ids(res),
        vec!["test000", "test001", "test002", "test003", "test004"]
    );

    res.sort_by_float64_desc("score");
    assert_eq!(res[0].get_float64("score"), 80.0);
    assert_eq!(res[4].get_float64("score"), 0.0);
}

#[test]
fn test_map_result_matches_independent_application() {
    let source = five_elements();
    let transform = |mut e: Element| {
        let score = e.get_float64("score");
        e.set("score", score - 5.0);
        e.set("seen", "yes");
        e
    };

    let expected: Vec<Element> = source.clone().into_iter().map(transform).collect();
    let mut mapped = source.clone();
    mapped.map(transform);

    assert_eq!(mapped.into_vec(), expected);
}

#[test]
fn test_empty_sequence() {
    let mut elements = Elements::new();

    assert!(elements.filter(|e| e.get_float64("score") > 10.0).is_empty());
    assert!(elements.map(|e| e).is_empty());
    assert!(elements.sort_by_float64_desc("score").is_empty());
}

#[test]
fn test_chaining() {
    let mut elements = five_elements().filter(|e| e.get_float64("score") >= 20.0);
    let top = elements
        .map(|mut e| {
            let score = e.get_float64("score");
            e.set("score", -score);
            e
        })
        .sort_by_float64_desc("score");

    assert_eq!(ids(top), vec!["test002", "test003", "test004"]);
}
