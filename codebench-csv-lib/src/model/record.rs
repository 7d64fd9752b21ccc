use super::Row;

/// Error raised when a row is requested from an entity whose reference has not been set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot build {entity} row: reference '{reference}' is not set")]
pub struct MissingReference {
    pub entity: &'static str,
    pub reference: &'static str,
}

impl MissingReference {
    #[must_use]
    pub const fn new(entity: &'static str, reference: &'static str) -> Self {
        Self { entity, reference }
    }
}

/// An entity that can be written as one row of a CSV table.
///
/// Implementations are generated by `define_record!`, which derives both the header and
/// the row from a single column list so the two can never drift apart.
pub trait Record {
    /// Entity name used in logs and errors.
    const KIND: &'static str;

    /// Name of the file that holds the table for this entity kind.
    const FILE_NAME: &'static str;

    /// Column names, in row order.
    fn csv_header() -> &'static [&'static str];

    /// Values of this entity, in header order.
    fn as_row(&self) -> Result<Row, MissingReference>;
}

/// Implements [`Record`] for an entity from an ordered column list.
///
/// Each column is written as `name: expression`, where the expression is evaluated with the
/// entity bound to the given identifier and may use `?` to propagate [`MissingReference`].
/// An optional `embeds` block appends the columns of metric bundles after the entity's own.
///
/// See `class.rs`, `run.rs`, or any entity file for usage examples.
macro_rules! define_record {
    (
        $ty:ident as $this:ident in $file:literal {
            $( $column:ident: $value:expr ),* $(,)?
        }
        $(
            embeds {
                $( $bundle:ty: $bundle_value:expr ),* $(,)?
            }
        )?
    ) => {
        impl $crate::model::Record for $ty {
            const KIND: &'static str = stringify!($ty);
            const FILE_NAME: &'static str = $file;

            fn csv_header() -> &'static [&'static str] {
                static HEADER: std::sync::LazyLock<Vec<&'static str>> = std::sync::LazyLock::new(|| {
                    [$( stringify!($column) ),*]
                        .into_iter()
                        $( $( .chain(<$bundle>::COLUMNS.iter().copied()) )* )?
                        .collect()
                });

                &HEADER
            }

            fn as_row(&self) -> Result<$crate::model::Row, $crate::model::MissingReference> {
                let $this = self;
                let mut row = $crate::model::Row::with_capacity(Self::csv_header().len());
                $( row.push($crate::model::Field::from($value)); )*
                $( $( ($bundle_value).extend_row(&mut row); )* )?
                Ok(row)
            }
        }
    };
}

pub(crate) use define_record;
