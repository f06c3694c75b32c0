use std::fs;

use minilisp::{
    RunOptions,
    error::{ParseError, RuntimeError},
    interpreter::value::ValueType,
    run,
};
use walkdir::WalkDir;

/// Runs `src` in lenient mode and returns `(stdout, stderr)`.
fn execute(src: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    if let Err(e) = run(src, &mut out, &mut err, &RunOptions::default()) {
        panic!("Script failed: {e}\n{src}");
    }
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn assert_output(src: &str, expected: &str) {
    let (out, err) = execute(src);
    assert_eq!(out, expected, "unexpected output for:\n{src}");
    assert!(err.is_empty(), "unexpected diagnostics for:\n{src}\n{err}");
}

/// Runs `src` in strict mode and returns the error it must fail with.
fn assert_failure(src: &str) -> Box<dyn std::error::Error> {
    let options = RunOptions { strict: true,
                               ..RunOptions::default() };
    match run(src, &mut Vec::new(), &mut Vec::new(), &options) {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    let e = assert_failure(src);
    match e.downcast::<RuntimeError>() {
        Ok(e) => *e,
        Err(e) => panic!("expected a runtime error, got: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    let e = assert_failure(src);
    match e.downcast::<ParseError>() {
        Ok(e) => *e,
        Err(e) => panic!("expected a parse error, got: {e}"),
    }
}

#[test]
fn data_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/data").sort_by_file_name()
                                  .into_iter()
                                  .filter_map(Result::ok)
                                  .filter(|e| e.path().extension().is_some_and(|ext| ext == "lsp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                           panic!("Missing expected output for {}: {e}", path.display())
                       });

        count += 1;
        assert_output(&source, &expected);
    }

    assert!(count > 0, "No programs found in tests/data");
}

#[test]
fn end_to_end_scenarios() {
    assert_output("(print-num (+ 1 2))", "3\n");
    assert_output("(print-bool (and #t #f))", "#f\n");
    assert_output("(define y 10) (print-num (* y 2))", "20\n");
}

#[test]
fn variadic_arithmetic() {
    assert_output("(print-num (+ 1 2 3))", "6\n");
    assert_output("(print-num (* 2 3 4))", "24\n");
    assert_output("(print-num (+ 5))", "5\n");
}

#[test]
fn comparisons() {
    assert_output("(print-bool (> 3 2))", "#t\n");
    assert_output("(print-bool (< 3 2))", "#f\n");
    assert_output("(print-bool (= 2 2))", "#t\n");
    assert_output("(print-bool (= (+ 1 1) (- 4 2)))", "#t\n");
}

#[test]
fn floor_division_identity() {
    for a in [-17, -9, -1, 0, 1, 8, 23] {
        for b in [-5, -3, -1, 2, 4, 7] {
            let src = format!("(print-num (+ (* (/ {a} {b}) {b}) (mod {a} {b})))");
            assert_output(&src, &format!("{a}\n"));
        }
    }
}

#[test]
fn double_negation() {
    assert_output("(print-bool (not (not #t)))", "#t\n");
    assert_output("(print-bool (not (not #f)))", "#f\n");
}

#[test]
fn if_evaluates_only_selected_branch() {
    assert_output("(print-num (if #t 1 (not 5)))", "1\n");
    assert_output("(print-num (if #f undefined 2))", "2\n");
    assert_output("(print-num (if #t 3 (/ 1 0)))", "3\n");
}

#[test]
fn define_overwrites() {
    assert_output("(define x 5)\n(print-num x)\n(define x 7)\n(print-num x)", "5\n7\n");
}

#[test]
fn booleans_can_be_defined() {
    assert_output("(define t (> 2 1)) (print-bool (and t #t))", "#t\n");
}

#[test]
fn function_parameters_shadow_globals() {
    assert_output("(define x 100)\n(print-num ((fun (x) (* x 2)) 4))\n(print-num x)",
                  "8\n100\n");
    assert_output("(define k 3)\n(print-num ((fun (x) (+ x k)) 4))", "7\n");
}

#[test]
fn function_body_does_not_see_caller_parameters() {
    let src = "(define inner (fun (y) (+ x y)))\n(print-num ((fun (x) (inner 1)) 5))";
    assert!(matches!(runtime_error(src),
                     RuntimeError::UnknownVariable { ref name, line: 1 } if name == "x"));
}

#[test]
fn boolean_function_results() {
    assert_output("(define even (fun (n) (= 0 (mod n 2)))) (print-bool (even 10))", "#t\n");
}

#[test]
fn missing_operand_is_a_parse_error() {
    assert_eq!(parse_error("(print-num)"),
               ParseError::UnexpectedToken { token: ")".to_string(),
                                             line:  1, });
}

#[test]
fn parse_error_stops_before_execution() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run("(print-num 1)\n(print-num (- 1))",
                     &mut out,
                     &mut err,
                     &RunOptions::default());

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn type_errors() {
    assert_eq!(runtime_error("(print-bool (not 1))"),
               RuntimeError::TypeError { expected: ValueType::Boolean,
                                         found:    ValueType::Number,
                                         line:     1, });
    assert!(matches!(runtime_error("(print-num (if 1 2 3))"),
                     RuntimeError::TypeError { expected: ValueType::Boolean, .. }));
    assert!(matches!(runtime_error("(print-num (+ 1 #t))"),
                     RuntimeError::TypeError { expected: ValueType::Number, .. }));
    assert!(matches!(runtime_error("(print-num (> 1 2))"),
                     RuntimeError::TypeError { expected: ValueType::Number,
                                               found:    ValueType::Boolean,
                                               .. }));
    assert!(matches!(runtime_error("(print-bool 1)"), RuntimeError::TypeError { .. }));
}

#[test]
fn type_error_message() {
    let e = runtime_error("(print-bool (not 1))");
    assert_eq!(e.to_string(),
               "Error on line 1: Type Error: Expect 'boolean' but got 'number'.");
}

#[test]
fn unknown_names() {
    assert!(matches!(runtime_error("(print-num y)"),
                     RuntimeError::UnknownVariable { ref name, .. } if name == "y"));
    assert!(matches!(runtime_error("(print-num (f 1))"),
                     RuntimeError::UnknownFunction { ref name, .. } if name == "f"));
}

#[test]
fn arity_mismatch() {
    assert_eq!(runtime_error("(print-num ((fun (a b) (+ a b)) 1))"),
               RuntimeError::ArgumentCountMismatch { expected: 2,
                                                     found:    1,
                                                     line:     1, });
    assert!(matches!(runtime_error("(define f (fun (x) x)) (f 1 2)"),
                     RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found:    2,
                                                           .. }));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(runtime_error("(/ 1 0)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("(mod 1 0)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("(* 9223372036854775807 2)"), RuntimeError::Overflow { .. }));
}

#[test]
fn runaway_recursion_is_reported() {
    let handle = std::thread::Builder::new().stack_size(256 * 1024 * 1024)
                                            .spawn(|| {
                                                runtime_error("(define loop (fun (n) (loop n))) (loop 1)")
                                            })
                                            .unwrap();
    assert!(matches!(handle.join().unwrap(), RuntimeError::RecursionLimit { .. }));
}

#[test]
fn runtime_errors_do_not_stop_later_statements() {
    let (out, err) = execute("(print-num 1)\n(print-bool (not 5))\n(print-num 3)");
    assert_eq!(out, "1\n3\n");
    assert_eq!(err, "Error on line 2: Type Error: Expect 'boolean' but got 'number'.\n");
}

#[test]
fn illegal_characters_are_reported_and_skipped() {
    let (out, err) = execute("(print-num (+ 1 2 $))");
    assert_eq!(out, "3\n");
    assert_eq!(err, "Error on line 1, column 19: Illegal character '$'.\n");
}

#[test]
fn statements_may_span_lines() {
    assert_output("(print-num\n  (+ 1\n     2))\n\n(print-bool\n#t)", "3\n#t\n");
}

#[test]
fn pipe_mode_prints_last_expression() {
    let mut out = Vec::new();
    let options = RunOptions { pipe_mode: true,
                               ..RunOptions::default() };
    run("(define x 4) (* x x) (print-num 1)", &mut out, &mut Vec::new(), &options).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "1\n16\n");
}

#[test]
fn sessions_are_isolated() {
    assert_output("(define z 1)", "");
    assert!(matches!(runtime_error("(print-num z)"), RuntimeError::UnknownVariable { .. }));
}
