use std::cell::RefCell;

use structedit::{locate, EditError, Editor, Inspect, Kind, Op, Operator, Path};

#[derive(Inspect, Debug, Clone, Default, PartialEq)]
struct Employee {
    name: String,
    id: String,
}

#[derive(Inspect, Debug, Clone, PartialEq)]
struct Office {
    foo: String,
    bar: String,
    employees: Vec<Employee>,
    boss: Option<Box<Employee>>,
    desks: [u8; 2],
}

fn office() -> Office {
    Office {
        foo: "5".into(),
        bar: "hello".into(),
        employees: vec![
            Employee {
                name: "Bob".into(),
                id: "A".into(),
            },
            Employee {
                name: "Sue".into(),
                id: "B".into(),
            },
        ],
        boss: Some(Box::new(Employee {
            name: "Snake".into(),
            id: "0".into(),
        })),
        desks: [1, 2],
    }
}

/// Records the scalar text of whatever it is applied to.
#[derive(Default)]
struct Probe {
    seen: RefCell<Vec<String>>,
}

impl Operator for Probe {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn apply(&self, target: &mut dyn Inspect) -> structedit::Result<()> {
        let text = target
            .scalar_text()
            .unwrap_or_else(|| format!("<{}>", target.kind()));
        self.seen.borrow_mut().push(text);
        Ok(())
    }
}

/// Asks for the reference itself instead of its target.
struct ReferenceProbe;

impl Operator for ReferenceProbe {
    fn name(&self) -> &'static str {
        "reference-probe"
    }

    fn wants_reference(&self) -> bool {
        true
    }

    fn apply(&self, target: &mut dyn Inspect) -> structedit::Result<()> {
        assert_eq!(target.kind(), Kind::Reference);
        Ok(())
    }
}

#[test]
fn find_value_matrix() {
    let cases = [
        ("foo", "5"),
        ("bar", "hello"),
        ("employees.0.name", "Bob"),
        ("employees.1.id", "B"),
        ("employees.1.name", "Sue"),
        ("boss.name", "Snake"),
        ("desks.1", "2"),
        ("employees", "<sequence>"),
        ("", "<record>"),
    ];

    let mut editor = Editor::new(office(), "");
    for (path, expected) in cases {
        let probe = Probe::default();
        editor.mutate(path, &probe).unwrap();
        assert_eq!(probe.seen.into_inner(), [expected], "{path}");
    }
}

#[test]
fn read_only_locate_matrix() {
    let value = office();
    let found = locate(&value, &"boss.id".parse().unwrap()).unwrap();
    assert_eq!(found.scalar_text().as_deref(), Some("0"));
    let found = locate(&value, &Path::root().field("employees")).unwrap();
    assert_eq!(found.len(), 2);
}

#[derive(Inspect, Debug, Clone, Default, PartialEq)]
struct Modify {
    foo: i32,
    bar: String,
    baz: bool,
    ratio: f32,
    small: u8,
    initial: char,
}

#[test]
fn set_scalar_matrix() {
    let mut data = Modify::default();
    let mutations = [
        ("foo", "7"),
        ("bar", "hi"),
        ("baz", "true"),
        ("ratio", "0.5"),
        ("small", "0xff"),
        ("initial", "Z"),
    ];

    {
        let mut editor = Editor::new(&mut data, "");
        for (path, value) in mutations {
            editor.mutate(path, &Op::set(value)).unwrap();
        }
    }

    assert_eq!(
        data,
        Modify {
            foo: 7,
            bar: "hi".into(),
            baz: true,
            ratio: 0.5,
            small: 255,
            initial: 'Z',
        }
    );
}

#[test]
fn set_parse_error_matrix() {
    let cases = [
        ("foo", "seven", Kind::Int),
        ("foo", "99999999999", Kind::Int),
        ("baz", "yes", Kind::Bool),
        ("ratio", "half", Kind::Float),
        ("small", "256", Kind::Uint),
        ("small", "-1", Kind::Uint),
        ("initial", "AB", Kind::String),
    ];

    let mut editor = Editor::new(Box::new(Modify::default()), "");
    for (path, text, kind) in cases {
        let err = editor.mutate(path, &Op::set(text)).unwrap_err();
        match err {
            EditError::ParseError {
                kind: got, text: t, ..
            } => {
                assert_eq!(got, kind, "{path}={text}");
                assert_eq!(t, text);
            }
            other => panic!("{path}={text}: unexpected {other:?}"),
        }
    }
    assert_eq!(**editor.state(), Modify::default());
}

#[derive(Inspect, Debug, Clone, Default, PartialEq)]
struct Growable {
    foo: i32,
    bar: Vec<i32>,
}

#[test]
fn grow_and_shrink() {
    let mut data = Growable {
        foo: 1,
        bar: vec![2, 3, 4],
    };

    {
        let mut editor = Editor::new(&mut data, "");
        editor.mutate("bar", &Op::Grow).unwrap();
    }
    assert_eq!(data.bar, vec![2, 3, 4, 0]);

    {
        let mut editor = Editor::new(&mut data, "");
        editor.mutate("bar", &Op::Shrink).unwrap();
        editor.mutate("bar", &Op::Shrink).unwrap();
    }
    assert_eq!(data.bar, vec![2, 3]);
    assert_eq!(data.foo, 1);
}

#[test]
fn shrink_on_empty_is_noop() {
    let mut editor = Editor::new(Box::new(Growable::default()), "");
    editor.mutate("bar", &Op::Shrink).unwrap();
    assert!(editor.state().bar.is_empty());
}

#[test]
fn grow_nested_records() {
    let mut editor = Editor::new(Box::new(office()), "");
    editor.mutate("employees", &Op::Grow).unwrap();
    editor.mutate("employees.2.name", &Op::set("Ann")).unwrap();
    assert_eq!(
        editor.state().employees[2],
        Employee {
            name: "Ann".into(),
            id: String::new(),
        }
    );
}

#[test]
fn locator_error_matrix() {
    let mut headless = office();
    headless.boss = None;

    let cases: Vec<(Office, &str, EditError)> = vec![
        (
            office(),
            "employees.9.name",
            EditError::IndexOutOfRange {
                at: "employees".parse().unwrap(),
                index: 9,
                len: 2,
            },
        ),
        (
            office(),
            "foo.bar",
            EditError::PathThroughScalar {
                at: "foo".parse().unwrap(),
                kind: Kind::String,
            },
        ),
        (
            office(),
            "not_a_field",
            EditError::UnknownField {
                at: Path::root(),
                name: "not_a_field".into(),
            },
        ),
        (
            office(),
            "0",
            EditError::IndexOnRecord {
                at: Path::root(),
                index: 0,
            },
        ),
        (
            office(),
            "employees.first",
            EditError::NameOnSequence {
                at: "employees".parse().unwrap(),
                name: "first".into(),
            },
        ),
        (
            headless,
            "boss.name",
            EditError::NilReference {
                at: "boss".parse().unwrap(),
            },
        ),
        (
            office(),
            "employees.1x",
            EditError::MalformedIndex {
                segment: "1x".into(),
            },
        ),
    ];

    for (value, path, expected) in cases {
        let mut editor = Editor::new(value, "");
        let err = editor.mutate(path, &Op::set("x")).unwrap_err();
        assert_eq!(err, expected, "{path}");
    }
}

#[test]
fn operator_kind_error_matrix() {
    let cases = [
        ("foo", Op::Grow, "grow", Kind::String),
        ("desks", Op::Grow, "grow", Kind::Sequence),
        ("desks", Op::Shrink, "shrink", Kind::Sequence),
        ("employees", Op::set("x"), "set", Kind::Sequence),
        ("employees.0", Op::set("x"), "set", Kind::Record),
    ];

    let mut editor = Editor::new(office(), "");
    for (path, op, operator, kind) in cases {
        let err = editor.mutate(path, &op).unwrap_err();
        assert_eq!(err, EditError::UnsupportedKind { operator, kind }, "{path}");
    }
    assert_eq!(*editor.state(), office());
}

#[test]
fn reference_wanting_operator() {
    let mut editor = Editor::new(office(), "");
    editor.mutate("boss", &ReferenceProbe).unwrap();
    assert_eq!(
        editor.mutate("boss.name", &ReferenceProbe).unwrap_err(),
        EditError::ReferenceMidPath {
            at: "boss".parse().unwrap()
        }
    );
}

#[test]
fn mutation_through_renamed_fields() {
    #[derive(Inspect, Default)]
    struct Renamed {
        #[inspect(rename = "Foo")]
        foo: i64,
        #[inspect(skip)]
        hidden: i64,
    }

    let mut editor = Editor::new(Renamed::default(), "");
    editor.mutate("Foo", &Op::set("-3")).unwrap();
    assert_eq!(editor.state().foo, -3);
    assert!(matches!(
        editor.mutate("foo", &Op::set("1")),
        Err(EditError::UnknownField { .. })
    ));
    assert!(matches!(
        editor.mutate("hidden", &Op::set("1")),
        Err(EditError::UnknownField { .. })
    ));
    assert_eq!(editor.state().hidden, 0);
}

#[test]
fn operator_from_request_keyword() {
    let mut editor = Editor::new(Box::new(Growable::default()), "");
    for (keyword, value) in [("grow", None), ("grow", None), ("set", Some("12"))] {
        let path = if keyword == "set" { "bar.1" } else { "bar" };
        let op = Op::from_keyword(keyword, value).unwrap();
        editor.mutate(path, &op).unwrap();
    }
    assert_eq!(editor.state().bar, vec![0, 12]);
    assert!(matches!(
        Op::from_keyword("delete", None),
        Err(EditError::UnknownOperator { .. })
    ));
}
