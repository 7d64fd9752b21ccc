//! Metric bundles embedded in runs and solutions.

use super::{Field, Row};

/// Column name of a bundle field: the field name itself unless overridden with `as "..."`.
macro_rules! column_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $column:literal) => {
        $column
    };
}

/// Generates a flat value bag whose fields all share one type.
///
/// Creates:
/// - the struct, with one public field per entry
/// - `COLUMNS`, the exported column names in declaration order
/// - `filled`, which applies one value to every field, and `UNSET`
/// - `extend_row`, which appends the fields to a row in declaration order
macro_rules! define_bundle {
    (
        $(#[$meta:meta])*
        $name:ident: $value_ty:ty {
            $(
                $(#[$field_meta:meta])*
                $field:ident $(as $column:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $value_ty,
            )*
        }

        impl $name {
            pub const COLUMNS: &'static [&'static str] = &[$( column_name!($field $(, $column)?) ),*];

            /// Every field unset, used when no source could be analysed.
            pub const UNSET: Self = Self::filled(None);

            /// Build a bundle with `value` in every field.
            #[must_use]
            pub const fn filled(value: $value_ty) -> Self {
                Self {
                    $( $field: value, )*
                }
            }

            pub fn extend_row(&self, row: &mut Row) {
                $( row.push(Field::from(self.$field)); )*
            }
        }
    };
}

define_bundle! {
    /// Complexity, raw and Halstead measurements of a piece of source code.
    Metrics: Option<f64> {
        /// Cyclomatic complexity.
        complexity,
        n_classes,
        n_functions,
        loc,
        /// Logical lines of code.
        lloc,
        /// Source lines of code.
        sloc,
        single_comments,
        comments,
        multilines,
        blank_lines,
        /// Distinct operators.
        h1,
        /// Distinct operands.
        h2,
        /// Total operators.
        total_operators as "N1",
        /// Total operands.
        total_operands as "N2",
        vocabulary as "h",
        length as "N",
        calculated_length as "calculated_N",
        volume,
        difficulty,
        effort,
        bugs,
        time,
    }
}

define_bundle! {
    /// Lexical token counts of a piece of source code.
    CodeTokens: Option<u64> {
        imports,
        assignments,
        assignments_unique,
        keywords,
        keywords_unique,
        literal_numbers,
        literal_strings,
        literal_booleans,
        logical_op,
        logical_op_unique,
        arithmetic_op,
        arithmetic_op_unique,
        comparison_op,
        comparison_op_unique,
        bitwise_op,
        bitwise_op_unique,
        identity_op,
        membership_op,
        conditionals,
        loops,
        loop_control,
        /// Calls to builtin functions.
        builtin_f,
        builtin_f_unique,
        /// Calls to type conversion functions.
        type_f,
        type_f_unique,
        lambdas,
        lpar,
        rpar,
        prints,
        inputs,
    }
}
