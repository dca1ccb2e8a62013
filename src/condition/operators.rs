use super::ConditionDataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolves an arity marker to the unary flag.
macro_rules! arity_is_unary {
    (Unary) => {
        true
    };
    (Binary) => {
        false
    };
}

/// Master macro defining the closed operator vocabulary: the enum with its
/// wire literals, the per-operator data type, the unary/binary split, and the
/// display label shown by the node editor.
macro_rules! define_condition_operators {
    ( $( ($variant:ident, $literal:literal, $data_type:ident, $arity:ident, $label:literal) ),* $(,)? ) => {
        /// An operator usable in a condition, scoped to one data type.
        ///
        /// The serialized form is the wire literal the editor stores (e.g.
        /// `string_contains`, `number_greater_than`, `boolean_is_true`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ConditionOperator {
            $( #[serde(rename = $literal)] $variant, )*
        }

        impl ConditionOperator {
            /// Every operator, in table order (string, number, integer, boolean).
            pub const ALL: &'static [ConditionOperator] = &[
                $( ConditionOperator::$variant, )*
            ];

            /// The wire literal, e.g. `string_contains`.
            pub fn as_str(self) -> &'static str {
                match self { $( ConditionOperator::$variant => $literal, )* }
            }

            /// The data type whose operator table this operator belongs to.
            pub fn data_type(self) -> ConditionDataType {
                match self { $( ConditionOperator::$variant => ConditionDataType::$data_type, )* }
            }

            /// Unary operators test `value1` on its own; binary operators
            /// additionally require `value2`.
            pub fn is_unary(self) -> bool {
                match self { $( ConditionOperator::$variant => arity_is_unary!($arity), )* }
            }

            /// The human-readable phrase shown in the editor's operator picker.
            pub fn label(self) -> &'static str {
                match self { $( ConditionOperator::$variant => $label, )* }
            }
        }
    };
}

define_condition_operators! {
    // String
    (StringExists, "string_exists", String, Unary, "exists"),
    (StringNotExists, "string_not_exists", String, Unary, "does not exist"),
    (StringIsEmpty, "string_is_empty", String, Unary, "is empty"),
    (StringIsNotEmpty, "string_is_not_empty", String, Unary, "is not empty"),
    (StringEquals, "string_equals", String, Binary, "equals"),
    (StringNotEquals, "string_not_equals", String, Binary, "does not equal"),
    (StringContains, "string_contains", String, Binary, "contains"),
    (StringNotContains, "string_not_contains", String, Binary, "does not contain"),
    (StringStartsWith, "string_starts_with", String, Binary, "starts with"),
    (StringNotStartsWith, "string_not_starts_with", String, Binary, "does not start with"),
    (StringEndsWith, "string_ends_with", String, Binary, "ends with"),
    (StringNotEndsWith, "string_not_ends_with", String, Binary, "does not end with"),
    (StringMatchesRegex, "string_matches_regex", String, Binary, "matches regex"),
    (StringNotMatchesRegex, "string_not_matches_regex", String, Binary, "does not match regex"),

    // Number
    (NumberExists, "number_exists", Number, Unary, "exists"),
    (NumberNotExists, "number_not_exists", Number, Unary, "does not exist"),
    (NumberIsEmpty, "number_is_empty", Number, Unary, "is empty"),
    (NumberIsNotEmpty, "number_is_not_empty", Number, Unary, "is not empty"),
    (NumberEquals, "number_equals", Number, Binary, "equals"),
    (NumberNotEquals, "number_not_equals", Number, Binary, "does not equal"),
    (NumberGreaterThan, "number_greater_than", Number, Binary, "is greater than"),
    (NumberLessThan, "number_less_than", Number, Binary, "is less than"),
    (NumberGreaterOrEqual, "number_greater_or_equal", Number, Binary, "is greater than or equal to"),
    (NumberLessOrEqual, "number_less_or_equal", Number, Binary, "is less than or equal to"),

    // Integer
    (IntegerExists, "integer_exists", Integer, Unary, "exists"),
    (IntegerNotExists, "integer_not_exists", Integer, Unary, "does not exist"),
    (IntegerIsEmpty, "integer_is_empty", Integer, Unary, "is empty"),
    (IntegerIsNotEmpty, "integer_is_not_empty", Integer, Unary, "is not empty"),
    (IntegerEquals, "integer_equals", Integer, Binary, "equals"),
    (IntegerNotEquals, "integer_not_equals", Integer, Binary, "does not equal"),
    (IntegerGreaterThan, "integer_greater_than", Integer, Binary, "is greater than"),
    (IntegerLessThan, "integer_less_than", Integer, Binary, "is less than"),
    (IntegerGreaterOrEqual, "integer_greater_or_equal", Integer, Binary, "is greater than or equal to"),
    (IntegerLessOrEqual, "integer_less_or_equal", Integer, Binary, "is less than or equal to"),

    // Boolean
    (BooleanExists, "boolean_exists", Boolean, Unary, "exists"),
    (BooleanNotExists, "boolean_not_exists", Boolean, Unary, "does not exist"),
    (BooleanIsEmpty, "boolean_is_empty", Boolean, Unary, "is empty"),
    (BooleanIsNotEmpty, "boolean_is_not_empty", Boolean, Unary, "is not empty"),
    (BooleanIsTrue, "boolean_is_true", Boolean, Unary, "is true"),
    (BooleanIsFalse, "boolean_is_false", Boolean, Unary, "is false"),
    (BooleanEquals, "boolean_equals", Boolean, Binary, "equals"),
    (BooleanNotEquals, "boolean_not_equals", Boolean, Binary, "does not equal"),
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed operator table for one data type, in editor picker order.
pub fn operators_for(data_type: ConditionDataType) -> Vec<ConditionOperator> {
    ConditionOperator::ALL
        .iter()
        .copied()
        .filter(|op| op.data_type() == data_type)
        .collect()
}
