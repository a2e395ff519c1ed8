use std::fmt::Display;
use std::rc::Rc;

use serde::{Deserialize, Deserializer};
use tools::stack::ensure_sufficient_stack;

// The tree follows the ESTree shape produced by the upstream parser. Every node
// carries a "type" tag, fields we don't evaluate (kind, loc, range, value...)
// are ignored during deserialization.

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct BlockStatement {
    #[serde(deserialize_with = "nested_statements")]
    pub body: Vec<Statement>,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct VariableDeclaration {
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct VariableDeclarator {
    pub id: Identifier,
    // None for declarations without value: var a;
    pub init: Option<Expression>,
}

// Parameters and body of a function expression. Shared behind an Rc so every
// closure built from the same node points to the same body
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Function {
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    ExpressionStatement {
        expression: Expression,
    },
    ReturnStatement {
        // return; without argument gives void
        argument: Option<Expression>,
    },
    ForStatement {
        init: Option<ForInit>,
        // Missing test means loop forever: for (;;)
        test: Option<Expression>,
        update: Option<Expression>,
        body: BlockStatement,
    },
    WhileStatement {
        test: Expression,
        body: BlockStatement,
    },
}

// for (var i = 0; ...) or for (i = 0; ...)
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(untagged)]
pub enum ForInit {
    Declaration(VariableDeclaration),
    Expression(Expression),
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    Identifier(Identifier),
    // Raw source text, validated when evaluated
    Literal {
        raw: String,
    },
    BinaryExpression {
        operator: BinaryOperator,
        #[serde(deserialize_with = "nested_expression")]
        left: Box<Expression>,
        #[serde(deserialize_with = "nested_expression")]
        right: Box<Expression>,
    },
    UnaryExpression {
        operator: UnaryOperator,
        #[serde(deserialize_with = "nested_expression")]
        argument: Box<Expression>,
    },
    LogicalExpression {
        operator: LogicalOperator,
        #[serde(deserialize_with = "nested_expression")]
        left: Box<Expression>,
        #[serde(deserialize_with = "nested_expression")]
        right: Box<Expression>,
    },
    ConditionalExpression {
        #[serde(deserialize_with = "nested_expression")]
        test: Box<Expression>,
        #[serde(deserialize_with = "nested_expression")]
        consequent: Box<Expression>,
        #[serde(deserialize_with = "nested_expression")]
        alternate: Box<Expression>,
    },
    FunctionExpression(Rc<Function>),
    CallExpression {
        #[serde(deserialize_with = "nested_expression")]
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    // Only plain identifiers can be assigned
    AssignmentExpression {
        operator: AssignmentOperator,
        left: Identifier,
        #[serde(deserialize_with = "nested_expression")]
        right: Box<Expression>,
    },
}

// Nesting depth of the tree is unbounded, each level may need a new stack segment
fn nested_expression<'de, D: Deserializer<'de>>(de: D) -> Result<Box<Expression>, D::Error> {
    ensure_sufficient_stack(|| Expression::deserialize(de).map(Box::new))
}

fn nested_statements<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<Statement>, D::Error> {
    ensure_sufficient_stack(|| Vec::deserialize(de))
}

impl Expression {
    // Node name as written in the tree, used in logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "Identifier",
            Expression::Literal { .. } => "Literal",
            Expression::BinaryExpression { .. } => "BinaryExpression",
            Expression::UnaryExpression { .. } => "UnaryExpression",
            Expression::LogicalExpression { .. } => "LogicalExpression",
            Expression::ConditionalExpression { .. } => "ConditionalExpression",
            Expression::FunctionExpression(_) => "FunctionExpression",
            Expression::CallExpression { .. } => "CallExpression",
            Expression::AssignmentExpression { .. } => "AssignmentExpression",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "==", alias = "===")]
    Eq,
    #[serde(rename = "!=", alias = "!==")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">=")]
    GtEq,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Eq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::GtEq => ">=",
        };

        write!(f, "{}", op)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
pub enum UnaryOperator {
    #[serde(rename = "!")]
    Not,
    // Negative number literals come as a minus applied to a literal
    #[serde(rename = "-")]
    Minus,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
}

impl AssignmentOperator {
    // Binary operation behind a compound assignment: x += 1 is x = x + 1
    pub fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            AssignmentOperator::Assign => None,
            AssignmentOperator::AddAssign => Some(BinaryOperator::Add),
            AssignmentOperator::SubAssign => Some(BinaryOperator::Sub),
            AssignmentOperator::MulAssign => Some(BinaryOperator::Mul),
            AssignmentOperator::DivAssign => Some(BinaryOperator::Div),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_binary_expression() {
        let expr: Expression = serde_json::from_value(json!({
            "type": "BinaryExpression",
            "operator": "+",
            "left": { "type": "Literal", "value": 1, "raw": "1" },
            "right": { "type": "Identifier", "name": "x" }
        }))
        .expect("Should deserialize");

        assert_eq!(
            expr,
            Expression::BinaryExpression {
                operator: BinaryOperator::Add,
                left: Box::new(Expression::Literal { raw: "1".into() }),
                right: Box::new(Expression::Identifier(Identifier::new("x"))),
            }
        );
    }

    #[test]
    fn deserialize_function_declaration() {
        let stmt: Statement = serde_json::from_value(json!({
            "type": "VariableDeclaration",
            "kind": "var",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "inc" },
                "init": {
                    "type": "FunctionExpression",
                    "params": [{ "type": "Identifier", "name": "n" }],
                    "body": {
                        "type": "BlockStatement",
                        "body": [{
                            "type": "ReturnStatement",
                            "argument": { "type": "Identifier", "name": "n" }
                        }]
                    }
                }
            }]
        }))
        .expect("Should deserialize");

        let function = Function {
            params: vec![Identifier::new("n")],
            body: BlockStatement {
                body: vec![Statement::ReturnStatement {
                    argument: Some(Expression::Identifier(Identifier::new("n"))),
                }],
            },
        };

        assert_eq!(
            stmt,
            Statement::VariableDeclaration(VariableDeclaration {
                declarations: vec![VariableDeclarator {
                    id: Identifier::new("inc"),
                    init: Some(Expression::FunctionExpression(Rc::new(function))),
                }],
            })
        );
    }

    #[test]
    fn deserialize_for_init_variants() {
        let decl: ForInit = serde_json::from_value(json!({
            "type": "VariableDeclaration",
            "declarations": [{
                "id": { "type": "Identifier", "name": "i" },
                "init": { "type": "Literal", "raw": "0" }
            }]
        }))
        .expect("Should deserialize");
        assert!(matches!(decl, ForInit::Declaration(_)));

        let expr: ForInit = serde_json::from_value(json!({
            "type": "AssignmentExpression",
            "operator": "=",
            "left": { "type": "Identifier", "name": "i" },
            "right": { "type": "Literal", "raw": "0" }
        }))
        .expect("Should deserialize");
        assert!(matches!(
            expr,
            ForInit::Expression(Expression::AssignmentExpression { .. })
        ));
    }

    #[test]
    fn missing_optional_fields() {
        let stmt: Statement = serde_json::from_value(json!({
            "type": "ForStatement",
            "init": null,
            "body": { "type": "BlockStatement", "body": [] }
        }))
        .expect("Should deserialize");

        assert_eq!(
            stmt,
            Statement::ForStatement {
                init: None,
                test: None,
                update: None,
                body: BlockStatement { body: vec![] },
            }
        );

        let ret: Statement = serde_json::from_value(json!({ "type": "ReturnStatement" }))
            .expect("Should deserialize");
        assert_eq!(ret, Statement::ReturnStatement { argument: None });
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let res: Result<Expression, _> = serde_json::from_value(json!({
            "type": "BinaryExpression",
            "operator": "%",
            "left": { "type": "Literal", "raw": "1" },
            "right": { "type": "Literal", "raw": "2" }
        }));

        assert!(res.is_err());
    }

    #[test]
    fn strict_equality_aliases() {
        let op: BinaryOperator = serde_json::from_value(json!("===")).unwrap();
        assert_eq!(op, BinaryOperator::Eq);

        let op: BinaryOperator = serde_json::from_value(json!("!==")).unwrap();
        assert_eq!(op, BinaryOperator::NotEq);
    }

    #[test]
    fn compound_assignment_operator() {
        assert_eq!(AssignmentOperator::Assign.binary_operator(), None);
        assert_eq!(
            AssignmentOperator::DivAssign.binary_operator(),
            Some(BinaryOperator::Div)
        );
        assert_eq!(BinaryOperator::Div.to_string(), "/");
        assert_eq!(BinaryOperator::NotEq.to_string(), "!=");
    }
}
