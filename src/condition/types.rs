use super::ConditionOperator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of data types a condition can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionDataType {
    String,
    Number,
    Integer,
    Boolean,
}

impl ConditionDataType {
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionDataType::String => "string",
            ConditionDataType::Number => "number",
            ConditionDataType::Integer => "integer",
            ConditionDataType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ConditionDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a conditional node combines its conditions into one verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicOperator {
    #[default]
    And,
    Or,
}

/// One user-authored condition on a conditional node.
///
/// `data_type` and `operator` stay `None` until the user picks them in the
/// editor, so a half-edited condition is representable without being
/// well-formed. `value1` is the operand under test (usually a field
/// reference); `value2` is the comparison operand and only meaningful for
/// binary operators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    #[serde(default, rename = "dataType")]
    pub data_type: Option<ConditionDataType>,
    #[serde(default)]
    pub operator: Option<ConditionOperator>,
    #[serde(default)]
    pub value1: String,
    #[serde(default)]
    pub value2: Option<String>,
}

impl Condition {
    /// A condition is well-formed once a data type is picked, the operator
    /// belongs to that type's table, and a binary operator has a non-empty
    /// `value2`.
    pub fn is_well_formed(&self) -> bool {
        let Some(data_type) = self.data_type else {
            return false;
        };
        let Some(operator) = self.operator else {
            return false;
        };
        if operator.data_type() != data_type {
            return false;
        }
        operator.is_unary() || self.value2.as_deref().is_some_and(|v| !v.is_empty())
    }
}
