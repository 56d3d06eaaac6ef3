use quasi::{error::InterpreterError, evaluate_in, interpreter::environment::Environment, parse, run};

fn eval(src: &str) -> String {
    match run(src) {
        Ok(value) => value.to_string(),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_value(src: &str, expected: &str) {
    assert_eq!(eval(src), expected, "script: {src}");
}

fn assert_parse_failure(src: &str) {
    match run(src) {
        Err(InterpreterError::Parse(errors)) => assert!(!errors.is_empty()),
        other => panic!("Script parsed but was expected to fail: {other:?}"),
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("1 + 2 * 3", "7");
    assert_value("(1 + 2) * 3", "9");
    assert_value("7 / 2", "3");
    assert_value("7 % 3", "1");
    assert_value("10 - 2 - 3", "5");
    assert_value("let x = 5; x-2", "3");
    assert_value("-7 / 2", "-3");
    assert_value("1.5 * 2.0", "3.0");
}

#[test]
fn mixed_operands_are_coerced() {
    assert_value("1 + 2.5", "3.5");
    assert_value("true + 1", "2");
    assert_value("\"n = \" + 1", "n = 1");
    assert_value("1 + \"a\"", "1a");
    assert_value("1 == 1.0", "true");
    assert_value("[1] + \"x\"", "[1]x");
}

#[test]
fn comparisons_and_logic() {
    assert_value("1 < 2", "true");
    assert_value("2 >= 3", "false");
    assert_value("\"a\" == \"a\"", "true");
    assert_value("\"a\" != \"b\"", "true");
    assert_value("true && false", "false");
    assert_value("0 || 1", "true");
    assert_value("1 < 2 && 2 < 3", "true");
    assert_value("!true", "false");
}

#[test]
fn strings() {
    assert_value("\"foo\" + \"bar\"", "foobar");
    assert_value("\"banana\" - \"an\"", "bana");
    assert_value("\"héllo\"[1]", "é");
    assert_value("size(\"héllo\")", "5");
    assert_value("let s = \"cat\"; s[0] = \"b\"; s", "bat");
    assert_value("\"a\\tb\"", "a\tb");
}

#[test]
fn arrays() {
    assert_value("[1, 2] + [3]", "[1, 2, 3]");
    assert_value("[1, 2, 3, 2] - [2]", "[1, 3]");
    assert_value("let a = [1, 2, 3]; a[1] = 20; a", "[1, 20, 3]");
    assert_value("let a = [1]; let b = a; push(b, 2); a", "[1, 2]");
    assert_value("let a = [1]; let b = clone(a); push(b, 2); a", "[1]");
    assert_value("let a = [1, 2]; a += [3]; a", "[1, 2, 3]");
    assert_value("[1, 2] == [1, 2]", "true");
    assert_value("[1, 2, 3][5]", "ERROR: index 5 out of range for length 3");
}

#[test]
fn hashes() {
    assert_value("let h = {\"b\": 2, \"a\": 1}; h", "{a:1,b:2}");
    assert_value("let h = {\"a\": 1}; h[\"a\"]", "1");
    assert_value("let h = {\"a\": 1}; h[\"z\"]", "null");
    assert_value("let h = {}; h[1] = \"one\"; h", "{1:one}");
    assert_value("{\"a\": 1} + {\"b\": 2}", "{a:1,b:2}");
    assert_value("{\"a\": 1, \"b\": 2} - {\"a\": 1}", "{b:2}");
    assert_value("{[1]: 2}", "ERROR: unusable as hash key: Array");
}

#[test]
fn bindings_and_assignment() {
    assert_value("let x = 1; x = 2; x", "2");
    assert_value("let x = 10; x -= 3; x", "7");
    assert_value("let x = 3; x *= 2.5; x", "3");
    assert_value("let x = 1; x = 2", "null");
    assert_value("y = 1; y", "1");
    assert_value("1 = 2", "ERROR: cannot assign to 1");
}

#[test]
fn compound_assignment_writes_through_shared_storage() {
    assert_value("let x = 1; let y = x; x += 1; y", "2");
    assert_value("let a = [1, 2]; let e = a[0]; a[0] += 5; e", "6");
    assert_value("let inc = function(n) { n += 1; }; let x = 1; inc(x); x", "2");
    assert_value("let x = 1; let y = clone(x); x += 1; y", "1");
}

#[test]
fn values_of_one_type_outside_the_lattice_do_not_combine() {
    assert_value("let f = function() { 1 }; f == f",
                 "ERROR: cannot convert Function and Function to the same type for operator ==");
    assert_value("let x = null; x == null",
                 "ERROR: cannot convert Null and Null to the same type for operator ==");
    assert_value("let q = quote(1); q == q",
                 "ERROR: cannot convert Quote and Quote to the same type for operator ==");
    assert_value("let p = size; p - p",
                 "ERROR: cannot convert BuiltinFunction and BuiltinFunction to the same type for operator -");
    assert_value("let x = null; x == 1", "false");
}

#[test]
fn a_failed_comparison_keeps_the_binding() {
    let env = Environment::new_global();
    for (setup, comparison, name) in [("let f = function() { 1 };", "f == f", "f"),
                                      ("let x = null;", "x == null", "x"),
                                      ("let q = quote(1);", "q == q", "q")]
    {
        evaluate_in(parse(setup).0, &env).unwrap();
        let result = evaluate_in(parse(comparison).0, &env).unwrap();
        assert!(result.to_string().starts_with("ERROR: "), "{comparison} gave {result}");
        let kept = evaluate_in(parse(&format!("type({name})")).0, &env).unwrap();
        assert_ne!(kept.to_string(), "Boolean", "{name} was rebound by {comparison}");
    }
}

#[test]
fn calls_write_to_their_own_frame() {
    assert_value("let x = 1; function() { x = 2; }(); x", "1");
    assert_value("let x = 1; if (true) { x = 2; } x", "2");
}

#[test]
fn functions_and_closures() {
    assert_value("let add = function(a, b) { a + b }; add(2, 3)", "5");
    assert_value("let adder = function(x) { function(y) { x + y } }; adder(2)(3)", "5");
    assert_value("let f = function() { return 1; 2 }; f()", "1");
    assert_value("function(x) { x * x }(4)", "16");
    assert_value("let n = 2; let add = function(a, b) { a + b }; n.add(3)", "5");
    assert_value("let f = function(a) { a }; f()", "ERROR: wrong number of arguments for f: want 1, got 0");
    assert_value("let x = 1; x()", "ERROR: x is not a function, found Integer");
}

#[test]
fn recursion() {
    let src = "let fib = function(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
               fib(20)";
    assert_value(src, "6765");
}

#[test]
fn counter_closure_updates_captured_binding() {
    let src = "let counter = function() {
                   let n = 0;
                   function() { n += 1; n }
               };
               let next = counter();
               next(); next(); next()";
    assert_value(src, "3");
}

#[test]
fn while_loops() {
    let src = "let i = 0; let total = 0; while (i < 10) { total += i; i += 1; } total";
    assert_value(src, "45");
    assert_value("while (false) { 1 }", "null");
}

#[test]
fn conditionals() {
    assert_value("if (1 > 2) { 10 } else { 20 }", "20");
    assert_value("if (false) { 10 }", "null");
    assert_value("1 > 2 ? \"yes\" : \"no\"", "no");
    assert_value("if (0) { \"zero is true\" }", "zero is true");
}

#[test]
fn errors_stop_the_program() {
    assert_value("let x = missing; 5", "ERROR: identifier not found: missing");
    assert_value("10 / 0", "ERROR: / by zero");
    assert_value("let x = 1; x /= 0", "ERROR: /= by zero");
    assert_value("pop([])", "ERROR: cannot pop from an empty array");
    assert_value("\"a\" * \"b\"", "ERROR: operator * is not supported for String");
}

#[test]
fn builtins() {
    assert_value("type(1)", "Integer");
    assert_value("type(1.0)", "Double");
    assert_value("type(\"s\")", "String");
    assert_value("type([])", "Array");
    assert_value("type({})", "Hash");
    assert_value("type(null)", "Null");
    assert_value("type(puts)", "BuiltinFunction");
    assert_value("toInteger(\"42\")", "42");
    assert_value("toInteger(3.9)", "3");
    assert_value("toDouble(2)", "2.0");
    assert_value("toString(12) + \"!\"", "12!");
    assert_value("toBoolean(0)", "false");
    assert_value("size([1, 2, 3])", "3");
    assert_value("let a = [1, 2]; pop(a); a", "[1]");
    assert_value("puts(1, 2)", "null");
    assert_value("listBuiltin()", "null");
    assert_value("size(1, 2)", "ERROR: wrong number of arguments for size: want 1, got 2");
}

#[test]
fn builtins_can_be_shadowed() {
    assert_value("let size = function(x) { 0 }; size([1, 2])", "0");
}

#[test]
fn quote_and_unquote() {
    assert_value("quote(1 + 2)", "QUOTE((1 + 2))");
    assert_value("let x = 3; quote(unquote(x) * y)", "QUOTE((3 * y))");
    assert_value("quote(unquote(quote(a)) + b)", "QUOTE((a + b))");
    assert_value("(1 + x).quote()", "QUOTE((1 + x))");
}

#[test]
fn macros_rewrite_the_program() {
    let src = "let unless = macro(cond, then, otherwise) {
                   quote(if (!(unquote(cond))) { unquote(then) } else { unquote(otherwise) })
               };
               unless(10 > 5, \"not greater\", \"greater\")";
    assert_value(src, "greater");
}

#[test]
fn a_macro_call_is_replaced_by_its_quote() {
    assert_value("let m = macro(a) { quote(unquote(a) + 1) }; m(2);", "3");
}

#[test]
fn macro_arguments_are_not_evaluated() {
    let src = "let ignore = macro(x) { quote(0) }; ignore(missing_identifier)";
    assert_value(src, "0");
}

#[test]
fn macros_are_not_values() {
    assert_value("let m = macro() { quote(1) }; m", "ERROR: identifier not found: m");
}

#[test]
fn a_macro_returning_a_non_quote_is_fatal() {
    match run("let m = macro() { 1 }; m()") {
        Err(InterpreterError::Macro(e)) => assert!(e.to_string().contains('m')),
        other => panic!("expected a macro error, got {other:?}"),
    }
}

#[test]
fn parse_errors() {
    assert_parse_failure("let = 5;");
    assert_parse_failure("let x 5;");
    assert_parse_failure("if (x { 1 }");
    assert_parse_failure("1 & 2");
    assert_parse_failure("[1, 2");
}

#[test]
fn parse_errors_are_all_reported() {
    match run("let = 1; let y 2;") {
        Err(InterpreterError::Parse(errors)) => assert!(errors.len() >= 2, "{errors:?}"),
        other => panic!("expected parse errors, got {other:?}"),
    }
}
