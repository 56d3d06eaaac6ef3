use std::fmt;

/// A complete parsed source file.
///
/// Statements run in order. The program's value is the value of the last
/// statement executed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top level statements in source order.
    pub statements: Vec<Statement>,
}

/// A braced statement list.
///
/// Blocks are the bodies of `if`, `while`, function and macro literals. They
/// never open a scope of their own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value;`
    Let {
        /// Name being bound.
        name:  String,
        /// Bound expression.
        value: Expr,
    },
    /// `return value;` (a bare `return;` carries `Expr::Null`).
    Return {
        /// Returned expression.
        value: Expr,
    },
    /// An expression evaluated for its value.
    Expression {
        /// The expression.
        expr: Expr,
    },
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every node owns its children, so cloning a node deep copies the whole
/// subtree. String literals keep their raw source text; escapes are decoded
/// when the literal is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Double(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// A string literal with its escapes still encoded.
    String(String),
    /// `null`
    Null,
    /// `[a, b, c]`
    Array {
        /// Element expressions.
        elements: Vec<Self>,
    },
    /// `{k: v, ...}`
    Hash {
        /// Key/value expression pairs in source order.
        entries: Vec<(Self, Self)>,
    },
    /// `function(params) { body }`
    Function {
        /// Parameter names.
        parameters: Vec<String>,
        /// Function body.
        body:       Block,
    },
    /// `macro(params) { body }`
    Macro {
        /// Parameter names.
        parameters: Vec<String>,
        /// Macro body.
        body:       Block,
    },
    /// A prefix operation such as `-x` or `!done`.
    Prefix {
        /// The operator.
        op:    PrefixOperator,
        /// The operand.
        right: Box<Self>,
    },
    /// A binary operation, including assignment and compound assignment.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `condition ? consequence : alternative`
    Ternary {
        /// Condition, tested with truthiness.
        condition:   Box<Self>,
        /// Value when the condition holds.
        consequence: Box<Self>,
        /// Value otherwise.
        alternative: Box<Self>,
    },
    /// `if (condition) { ... } else { ... }`
    If {
        /// Condition, tested with truthiness.
        condition:   Box<Self>,
        /// Block run when the condition holds.
        consequence: Block,
        /// Optional `else` block.
        alternative: Option<Block>,
    },
    /// `while (condition) { ... }`
    While {
        /// Condition, re-evaluated before each iteration.
        condition: Box<Self>,
        /// Loop body.
        body:      Block,
    },
    /// `function(arguments)`
    Call {
        /// Callee expression.
        function:  Box<Self>,
        /// Argument expressions.
        arguments: Vec<Self>,
    },
    /// `receiver.function(arguments)`, sugar for `function(receiver, arguments)`.
    DotCall {
        /// Expression before the dot.
        receiver:  Box<Self>,
        /// Name of the function after the dot.
        function:  String,
        /// Remaining argument expressions.
        arguments: Vec<Self>,
    },
    /// `target[index]`
    Index {
        /// Indexed expression.
        target: Box<Self>,
        /// Index expression.
        index:  Box<Self>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

impl InfixOperator {
    /// Returns `true` for `+= -= *= /= %=`.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self,
                 Self::AddAssign
                 | Self::SubtractAssign
                 | Self::MultiplyAssign
                 | Self::DivideAssign
                 | Self::ModuloAssign)
    }

    /// Maps a compound assignment to the plain operator it applies.
    ///
    /// Every other operator maps to itself.
    #[must_use]
    pub const fn arithmetic(self) -> Self {
        match self {
            Self::AddAssign => Self::Add,
            Self::SubtractAssign => Self::Subtract,
            Self::MultiplyAssign => Self::Multiply,
            Self::DivideAssign => Self::Divide,
            Self::ModuloAssign => Self::Modulo,
            other => other,
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    Not,
    Plus,
    Minus,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{
            Add, AddAssign, And, Assign, Divide, DivideAssign, Equal, Greater, GreaterEqual, Less,
            LessEqual, Modulo, ModuloAssign, Multiply, MultiplyAssign, NotEqual, Or, Subtract,
            SubtractAssign,
        };
        let operator = match self {
            Assign => "=",
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
            AddAssign => "+=",
            SubtractAssign => "-=",
            MultiplyAssign => "*=",
            DivideAssign => "/=",
            ModuloAssign => "%=",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{statement} ")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value:?}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::String(raw) => write!(f, "\"{raw}\""),
            Self::Null => write!(f, "null"),
            Self::Array { elements } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::Hash { entries } => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function { parameters, body } => {
                write!(f, "function({}) {body}", parameters.join(", "))
            },
            Self::Macro { parameters, body } => {
                write!(f, "macro({}) {body}", parameters.join(", "))
            },
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Ternary { condition,
                            consequence,
                            alternative, } => {
                write!(f, "({condition} ? {consequence} : {alternative})")
            },
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::While { condition, body } => write!(f, "while ({condition}) {body}"),
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::DotCall { receiver,
                            function,
                            arguments, } => {
                write!(f, "{receiver}.{function}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::Index { target, index } => write!(f, "({target}[{index}])"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> Box<Expr> {
        Box::new(Expr::Integer(value))
    }

    #[test]
    fn infix_description_is_fully_parenthesized() {
        let expr = Expr::Infix { left:  int(1),
                                 op:    InfixOperator::Add,
                                 right: Box::new(Expr::Infix { left:  int(2),
                                                               op:    InfixOperator::Multiply,
                                                               right: int(3), }), };
        assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn double_description_keeps_fraction() {
        assert_eq!(Expr::Double(3.0).to_string(), "3.0");
    }

    #[test]
    fn compound_operators_map_to_arithmetic() {
        assert!(InfixOperator::ModuloAssign.is_compound());
        assert!(!InfixOperator::Modulo.is_compound());
        assert_eq!(InfixOperator::SubtractAssign.arithmetic(), InfixOperator::Subtract);
        assert_eq!(InfixOperator::Less.arithmetic(), InfixOperator::Less);
    }
}
