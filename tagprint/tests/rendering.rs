//! End-to-end rendering of element trees through the default printer.

use tagprint::value::{array, object};
use tagprint::{Component, Element, Function, PrintOptions, Printer, Value, pretty_format};

fn item(text: &str, done: bool) -> Element {
    Element::tag("li")
        .with_prop("className", if done { "done" } else { "open" })
        .with_children(text)
}

fn todo_list() -> Value {
    Element::component(Component::named("TodoList"))
        .with_prop("onToggle", Function::named("toggle"))
        .with_prop("filter", "all")
        .with_children(array([
            Value::from(Element::tag("h2").with_children("Today")),
            array([item("Write docs", true), item("Ship it", false)]),
            Value::from(false),
            Value::Null,
        ]))
        .into()
}

#[test]
fn renders_component_tree() {
    let out = pretty_format(&todo_list(), PrintOptions::default());
    insta::assert_snapshot!(out, @r#"
    <TodoList
      filter="all"
      onToggle={[Function toggle]}
    >
      <h2>
        Today
      </h2>
      <li
        className="done"
      >
        Write docs
      </li>
      <li
        className="open"
      >
        Ship it
      </li>
    </TodoList>
    "#);
}

#[test]
fn renders_component_tree_compact() {
    let out = pretty_format(&todo_list(), PrintOptions::new().min());
    assert_eq!(
        out,
        "<TodoList filter=\"all\" onToggle={[Function toggle]}><h2>Today</h2>\
         <li className=\"done\">Write docs</li><li className=\"open\">Ship it</li></TodoList>"
    );
}

#[test]
fn renders_object_prop_on_its_own_lines() {
    let elem = Element::tag("div")
        .with_prop("style", object([("margin", Value::from(0)), ("color", Value::from("red"))]));
    let out = Printer::default().format(&elem.into());
    insta::assert_snapshot!(out, @r#"
    <div
      style={
        Object {
          "color": "red",
          "margin": 0,
        }
      }
    />
    "#);
}

#[test]
fn renders_elements_inside_collections() {
    let value = array([
        Value::from(Element::tag("br")),
        Value::from(Element::tag("input").with_prop("x", "y")),
    ]);
    let out = Printer::default().format(&value);
    insta::assert_snapshot!(out, @r#"
    Array [
      <br />,
      <input
        x="y"
      />,
    ]
    "#);
}

#[test]
fn prop_order_ignores_insertion_order() {
    let forward = Element::tag("a")
        .with_prop("href", "/")
        .with_prop("id", "home")
        .with_prop("tabIndex", 0);
    let backward = Element::tag("a")
        .with_prop("tabIndex", 0)
        .with_prop("id", "home")
        .with_prop("href", "/");

    let printer = Printer::default();
    let a = printer.format(&forward.into());
    let b = printer.format(&backward.into());
    assert_eq!(a, b);
    assert_eq!(a, "<a\n  href=\"/\"\n  id=\"home\"\n  tabIndex={0}\n/>");
}

#[test]
fn no_props_means_no_break_before_close() {
    let out = Printer::default().format(&Element::tag("em").with_children("hi").into());
    assert!(out.starts_with("<em>\n"));
    assert!(out.ends_with("\n</em>"));
}

#[test]
fn min_flag_controls_break_before_close() {
    let elem: Value = Element::tag("img").with_prop("alt", "").into();
    assert_eq!(Printer::default().format(&elem), "<img\n  alt=\"\"\n/>");
    assert_eq!(
        Printer::new(PrintOptions::new().min()).format(&elem),
        "<img alt=\"\" />"
    );
}

#[test]
fn empty_fragment_still_opens_and_closes() {
    let elem = Element::tag("div").with_children(Vec::<Value>::new());
    assert_eq!(
        Printer::default().format(&elem.into()),
        "<div>\n  \n</div>"
    );
}

#[test]
fn deep_nesting_keeps_indentation() {
    let mut node = Element::tag("span").with_children("leaf");
    for _ in 0..3 {
        node = Element::tag("div").with_children(node);
    }
    let out = Printer::default().format(&node.into());
    insta::assert_snapshot!(out, @r"
    <div>
      <div>
        <div>
          <span>
            leaf
          </span>
        </div>
      </div>
    </div>
    ");
}

#[test]
fn escapes_text_children_only() {
    let elem = Element::tag("code")
        .with_prop("title", "a<b")
        .with_children("if a < b && c > d");
    let out = Printer::default().format(&elem.into());
    assert!(out.contains("if a &lt; b && c &gt; d"));
    // prop strings go through the host printer, which does not escape markup
    assert!(out.contains("title=\"a<b\""));
}

#[test]
fn custom_indent_width() {
    let elem = Element::tag("p").with_prop("lang", "en").with_children("bonjour");
    let out = Printer::new(PrintOptions::new().with_indent(4)).format(&elem.into());
    assert_eq!(out, "<p\n    lang=\"en\"\n>\n    bonjour\n</p>");
}
