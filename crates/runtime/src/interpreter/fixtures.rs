// Builders for ESTree nodes, so tests read closer to the source program
use serde_json::{json, Value};

use super::Interpreter;
use crate::frontend::ast::Program;

pub fn lit(raw: &str) -> Value {
    json!({ "type": "Literal", "raw": raw })
}

pub fn number(nb: i64) -> Value {
    lit(&nb.to_string())
}

pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn binary(op: &str, left: Value, right: Value) -> Value {
    json!({ "type": "BinaryExpression", "operator": op, "left": left, "right": right })
}

pub fn logical(op: &str, left: Value, right: Value) -> Value {
    json!({ "type": "LogicalExpression", "operator": op, "left": left, "right": right })
}

pub fn unary(op: &str, argument: Value) -> Value {
    json!({ "type": "UnaryExpression", "operator": op, "prefix": true, "argument": argument })
}

pub fn conditional(test: Value, consequent: Value, alternate: Value) -> Value {
    json!({
        "type": "ConditionalExpression",
        "test": test,
        "consequent": consequent,
        "alternate": alternate
    })
}

pub fn function(params: &[&str], body: Vec<Value>) -> Value {
    let params = params.iter().map(|p| ident(p)).collect::<Vec<Value>>();

    json!({
        "type": "FunctionExpression",
        "params": params,
        "body": { "type": "BlockStatement", "body": body }
    })
}

pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpression", "callee": callee, "arguments": arguments })
}

pub fn assign(name: &str, right: Value) -> Value {
    assign_op("=", name, right)
}

pub fn assign_op(op: &str, name: &str, right: Value) -> Value {
    json!({ "type": "AssignmentExpression", "operator": op, "left": ident(name), "right": right })
}

pub fn var(name: &str, init: Value) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": "var",
        "declarations": [{ "type": "VariableDeclarator", "id": ident(name), "init": init }]
    })
}

pub fn expr_stmt(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

pub fn ret(argument: Value) -> Value {
    json!({ "type": "ReturnStatement", "argument": argument })
}

// No if statement in the language, a while that returns right away does the job
pub fn ret_if(test: Value, argument: Value) -> Value {
    while_loop(test, vec![ret(argument)])
}

pub fn while_loop(test: Value, body: Vec<Value>) -> Value {
    json!({
        "type": "WhileStatement",
        "test": test,
        "body": { "type": "BlockStatement", "body": body }
    })
}

pub fn for_loop(init: Value, test: Value, update: Value, body: Vec<Value>) -> Value {
    json!({
        "type": "ForStatement",
        "init": init,
        "test": test,
        "update": update,
        "body": { "type": "BlockStatement", "body": body }
    })
}

pub fn program(body: Vec<Value>) -> Program {
    serde_json::from_value(json!({ "type": "Program", "body": body }))
        .expect("Test program should deserialize")
}

pub fn run(body: Vec<Value>) -> String {
    Interpreter {}.run(&program(body))
}
