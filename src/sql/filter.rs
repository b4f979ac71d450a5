//! Turns a struct of optional filter fields into a WHERE fragment plus its bound arguments.
//!
//! Filterable structs list their fields through [`FilterFields`], normally generated by
//! [`filter_fields!`](crate::filter_fields). Field order is declaration order, and the column
//! name is the lowercased field name.

use crate::sql::PgBindValue;

/// One filterable field: its declared name and its value when present.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterField {
    pub name: &'static str,
    pub value: Option<PgBindValue>,
}

pub trait FilterFields {
    fn filter_fields(&self) -> Vec<FilterField>;
}

/// Predicate fragment ready to splice after a base WHERE condition.
/// `sql` is empty or starts with ` AND `; `$n` placeholders index into `args`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterClause {
    pub sql: String,
    pub args: Vec<PgBindValue>,
}

impl FilterClause {
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

pub fn build_filter_conditions<F: FilterFields + ?Sized>(filters: &F) -> FilterClause {
    let mut conditions = Vec::new();
    let mut args = Vec::new();

    for field in filters.filter_fields() {
        let Some(value) = field.value else { continue };
        if value.is_empty() {
            continue;
        }
        let column = field.name.to_lowercase();
        let op = if value.is_text() { "ILIKE" } else { "=" };
        conditions.push(format!("{} {} ${}", column, op, args.len() + 1));
        args.push(value);
    }

    let sql = if conditions.is_empty() {
        String::new()
    } else {
        format!(" AND {}", conditions.join(" AND "))
    };
    FilterClause { sql, args }
}

/// Implements [`FilterFields`] for a struct whose listed fields are `Option<T>` with
/// `PgBindValue: From<T>`.
///
/// ```ignore
/// filter_fields!(AdminFilter { email, active, firstname, lastname });
/// ```
#[macro_export]
macro_rules! filter_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::sql::FilterFields for $ty {
            fn filter_fields(&self) -> Vec<$crate::sql::FilterField> {
                vec![$(
                    $crate::sql::FilterField {
                        name: stringify!($field),
                        value: self.$field.clone().map($crate::sql::PgBindValue::from),
                    }
                ),*]
            }
        }
    };
}
