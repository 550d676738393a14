//! Built-in sample trees for the demo commands.
//!
//! Each fixture is a small nested spec in JSON form, from toy shapes that
//! show a single expansion rule up to full transistor package families.

use partwise_expand::Value;

/// A named sample tree.
pub struct Fixture {
    pub name: &'static str,
    pub summary: &'static str,
    source: &'static str,
}

impl Fixture {
    /// Parses the fixture into a value tree.
    pub fn tree(&self) -> Value {
        Value::from_json_str(self.source).expect("fixture JSON is valid")
    }
}

/// Looks a fixture up by name.
pub fn find(name: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|fixture| fixture.name == name)
}

pub static FIXTURES: &[Fixture] = &[
    Fixture {
        name: "s1",
        summary: "one constant, one two-way variant",
        source: r#"{"key1": "constant value", "key2": ["option 1", "option 2"]}"#,
    },
    Fixture {
        name: "s2",
        summary: "one constant, two independent variants (2x2 product)",
        source: r#"{
            "key1": "constant value",
            "key2": ["option 1", "option 2"],
            "key3": ["option 3", "option 4"]
        }"#,
    },
    Fixture {
        name: "s3",
        summary: "variant list mixing plain values and override blocks",
        source: r#"{
            "key1": "default value",
            "key2": [
                "option 1",
                {"key3": "fixed value", "key4": ["option 2", "option 3"]},
                {"key1": "override", "key2": "keep key"}
            ]
        }"#,
    },
    Fixture {
        name: "list1",
        summary: "flat list, passes through unchanged",
        source: r#"["first", "second", "third"]"#,
    },
    Fixture {
        name: "list2",
        summary: "flat list with duplicates (kept, not deduplicated)",
        source: r#"["dup", "dup", "third"]"#,
    },
    Fixture {
        name: "l1",
        summary: "nested list flattens in place",
        source: r#"["a", ["b", "c"], "d"]"#,
    },
    Fixture {
        name: "l2",
        summary: "list holding mappings with their own variants",
        source: r#"[
            "a",
            {"k1": [1, 2], "k2": "c"},
            {"k3": ["a", "b"], "k4": 5}
        ]"#,
    },
    Fixture {
        name: "dup1",
        summary: "variant list with duplicate values (kept)",
        source: r#"{"cmn": "always", "hasdup": ["dup", "dup", "other"]}"#,
    },
    Fixture {
        name: "equiv1",
        summary: "plain key: value",
        source: r#"{"key": "value"}"#,
    },
    Fixture {
        name: "equiv2",
        summary: "same result as equiv1, via a one-element list",
        source: r#"{"key": ["value"]}"#,
    },
    Fixture {
        name: "equiv3",
        summary: "same result as equiv1, via a cascaded mapping",
        source: r#"{"key": [{"key": "value"}]}"#,
    },
    Fixture {
        name: "equiv4",
        summary: "same result as equiv1, nested two levels deep",
        source: r#"{"key": [{"key": [{"key": "value"}]}]}"#,
    },
    Fixture {
        name: "equiv5",
        summary: "same result as equiv1, cascade replaces the slot key",
        source: r#"{"other": [{"key": "value"}]}"#,
    },
    Fixture {
        name: "equiv6",
        summary: "same result as equiv1, mixed slot keys",
        source: r#"{"key": [{"other": [{"key": "value"}]}]}"#,
    },
    Fixture {
        name: "equiv7",
        summary: "same result as equiv1, both slot keys replaced",
        source: r#"{"other1": [{"other2": [{"key": "value"}]}]}"#,
    },
    Fixture {
        name: "sub1",
        summary: "BJT package family with one override block",
        source: r#"{
            "family": "bjt",
            "footprint": "",
            "package": [
                "TO220",
                {"footprint": ["SIL", "triangle"], "package": "TO92"},
                "SOT23"
            ]
        }"#,
    },
    Fixture {
        name: "sub2",
        summary: "full transistor family, override blocks first (96 parts)",
        source: r#"{
            "footprint": "",
            "mounting": "THT",
            "package": [
                {"package": "TO92", "footprint": ["SIL", "triangle"]},
                {"package": "SOT23", "mounting": "SMD"},
                "TO220"
            ],
            "label": ["pin", ""],
            "type": ["NPN", "PNP"],
            "pinout": ["BCE", "BEC", "CBE", "CEB", "EBC", "ECB"]
        }"#,
    },
    Fixture {
        name: "sub3",
        summary: "full transistor family, plain package first (96 parts)",
        source: r#"{
            "footprint": "",
            "mounting": "THT",
            "package": [
                "TO220",
                {"package": "TO92", "footprint": ["SIL", "triangle"]},
                {"package": "SOT23", "mounting": "SMD"}
            ],
            "label": ["pin", ""],
            "type": ["NPN", "PNP"],
            "pinout": ["BCE", "BEC", "CBE", "CEB", "EBC", "ECB"]
        }"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fixture_parses_and_expands() {
        for fixture in FIXTURES {
            let combos = fixture.tree().expand().unwrap().count();
            assert!(combos > 0, "{} produced no combinations", fixture.name);
        }
    }

    #[test]
    fn test_fixture_names_are_unique() {
        for fixture in FIXTURES {
            assert!(
                std::ptr::eq(find(fixture.name).unwrap(), fixture),
                "duplicate fixture name {}",
                fixture.name
            );
        }
    }

    #[test]
    fn test_known_combination_counts() {
        let counts = [
            ("s1", 2),
            ("s2", 4),
            ("s3", 4),
            ("list1", 3),
            ("l1", 4),
            ("l2", 5),
            ("dup1", 3),
            ("equiv4", 1),
            ("sub1", 4),
            ("sub2", 96),
            ("sub3", 96),
        ];
        for (name, expected) in counts {
            let combos = find(name).unwrap().tree().expand().unwrap().count();
            assert_eq!(combos, expected, "for fixture {name}");
        }
    }

    #[test]
    fn test_equivalent_shapes_agree() {
        let reference: Vec<Value> = find("equiv1").unwrap().tree().expand().unwrap().collect();
        for name in ["equiv2", "equiv3", "equiv4", "equiv5", "equiv6", "equiv7"] {
            let combos: Vec<Value> = find(name).unwrap().tree().expand().unwrap().collect();
            assert_eq!(combos, reference, "for fixture {name}");
        }
    }
}
