//! End-to-end driver example: stage a buffer, evaluate a batch of
//! requests, and render the results.

use tally_core::{ArithmeticRequest, EvalError, Operator};
use tally_eval::{evaluate, evaluate_request};
use tally_stage::IndexBuffer;

fn main() {
    println!("=== Tally Calculator Example ===\n");

    // Stage the default 100-element buffer and spot-check the fill.
    let buffer = match IndexBuffer::new(IndexBuffer::DEFAULT_CAPACITY) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("staging failed: {err}");
            std::process::exit(1);
        }
    };
    println!(
        "staged {} elements ({} bytes): first={:?}, last={:?}",
        buffer.len(),
        buffer.memory_bytes(),
        buffer.get(0),
        buffer.get(buffer.len() - 1),
    );

    // A first request, checked the long way round.
    match evaluate(10, 5, Operator::Add) {
        Ok(15) => println!("10 + 5 = 15, as expected"),
        Ok(other) => println!("10 + 5 = {other}?!"),
        Err(err) => println!("10 + 5 failed: {err}"),
    }

    // Walk a small batch of requests, including the guarded division.
    let requests = [
        ArithmeticRequest::new(10, 5, Operator::Subtract),
        ArithmeticRequest::new(10, 5, Operator::Multiply),
        ArithmeticRequest::new(7, 2, Operator::Divide),
        ArithmeticRequest::new(10, 0, Operator::Divide),
        ArithmeticRequest::new(6, 42, Operator::Multiply),
    ];
    for request in &requests {
        match evaluate_request(request) {
            Ok(value) => println!("{request} = {value}"),
            Err(EvalError::DivisionByZero) => {
                println!("{request} is undefined: division by zero");
            }
        }
    }

    // Operator glyphs parse at the boundary; unknown glyphs are rejected
    // before a request can be formed.
    for glyph in ['+', '%'] {
        match Operator::from_symbol(glyph) {
            Some(op) => println!("'{glyph}' parses as {op:?}"),
            None => println!("'{glyph}' is not a recognized operator"),
        }
    }
}
