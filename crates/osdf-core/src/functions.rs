//! Layout-independent table algorithms.
//!
//! Both table layouts and their views route schema checks, row building,
//! column extraction, slicing and sorting through these functions so the
//! two layouts cannot drift apart.

use std::cmp::Ordering;

use crate::datum::{Datum, DatumValue};
use crate::error::FrameError;
use crate::id::RowId;
use crate::metadata::ColumnMetadata;
use crate::row::{DataRow, NewRow};
use crate::traits::{HasColumns, HasRows};
use crate::types::Comparison;

/// Total order over datums. See [`Datum::compare`].
pub fn compare_datums(a: &Datum, b: &Datum) -> Ordering {
    a.compare(b)
}

/// Evaluate `value <comparison> threshold`.
///
/// Unordered float pairs satisfy only [`Comparison::NotEqual`].
pub fn compare_to_threshold<T: DatumValue>(
    comparison: Comparison,
    threshold: &T,
    value: &T,
) -> bool {
    comparison.holds(value.partial_cmp(threshold))
}

/// Borrow a cell as `T`, reporting a mismatch against `column`.
pub fn get_datum_value<'a, T: DatumValue>(
    datum: &'a Datum,
    column: &str,
) -> Result<&'a T, FrameError> {
    datum.get::<T>().ok_or_else(|| FrameError::TypeMismatch {
        column: column.to_owned(),
        expected: datum.data_type(),
        found: T::DATA_TYPE,
    })
}

/// Overwrite a cell with `value`, reporting a mismatch against `column`.
pub fn set_datum_value<T: DatumValue>(
    datum: &mut Datum,
    value: T,
    column: &str,
) -> Result<(), FrameError> {
    let expected = datum.data_type();
    match T::from_datum_mut(datum) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(FrameError::TypeMismatch {
            column: column.to_owned(),
            expected,
            found: T::DATA_TYPE,
        }),
    }
}

/// Append `value` as the next cell of `row`, checked against the schema.
///
/// The target column is the one at `row.size_cols()`.
pub fn add_column_to_row(
    schema: &ColumnMetadata,
    row: &mut DataRow,
    value: Datum,
) -> Result<(), FrameError> {
    let index = row.size_cols();
    let Some(column) = schema.get(index) else {
        return Err(FrameError::RowArityMismatch {
            expected: schema.len(),
            found: index + 1,
        });
    };
    if column.data_type() != value.data_type() {
        return Err(FrameError::TypeMismatch {
            column: column.name().to_owned(),
            expected: column.data_type(),
            found: value.data_type(),
        });
    }
    row.push(value);
    Ok(())
}

/// Validate `values` against the schema and build the row to append.
///
/// Checks run in order: a schema exists, the value count matches, no
/// column is read-only, every value has its column's type. The first
/// failure is returned and no partial row escapes.
pub fn build_row(
    schema: &ColumnMetadata,
    id: RowId,
    values: NewRow,
) -> Result<DataRow, FrameError> {
    if schema.is_empty() {
        return Err(FrameError::NoColumnsConfigured);
    }
    if values.len() != schema.len() {
        return Err(FrameError::RowArityMismatch {
            expected: schema.len(),
            found: values.len(),
        });
    }
    if let Some(name) = schema.first_read_only() {
        return Err(FrameError::ReadOnlyColumn {
            name: name.to_owned(),
        });
    }
    let mut row = DataRow::new(id);
    for value in values.into_values() {
        add_column_to_row(schema, &mut row, value)?;
    }
    Ok(row)
}

/// Resolve `name` and check that it holds `T`.
pub fn typed_column_index<T: DatumValue, S: HasColumns + ?Sized>(
    source: &S,
    name: &str,
) -> Result<usize, FrameError> {
    let index = source.column_index(name)?;
    let expected = source.column_metadata().data_type(index);
    if expected != T::DATA_TYPE {
        return Err(FrameError::TypeMismatch {
            column: name.to_owned(),
            expected,
            found: T::DATA_TYPE,
        });
    }
    Ok(index)
}

/// Copy the named column out as a vector in row order.
pub fn extract_column<T, S>(source: &S, name: &str) -> Result<Vec<T>, FrameError>
where
    T: DatumValue,
    S: HasColumns + HasRows + ?Sized,
{
    let index = typed_column_index::<T, _>(source, name)?;
    (0..source.row_count())
        .map(|position| get_datum_value::<T>(&source.datum(position, index), name).cloned())
        .collect()
}

/// Copy the named column out as owned datums in row order.
pub fn column_datums<S>(source: &S, name: &str) -> Result<Vec<Datum>, FrameError>
where
    S: HasColumns + HasRows + ?Sized,
{
    let index = source.column_index(name)?;
    Ok((0..source.row_count())
        .map(|position| source.datum(position, index).into_owned())
        .collect())
}

/// Positions whose value in the named column satisfies
/// `value <comparison> threshold`, in row order.
pub fn matching_positions<T, S>(
    source: &S,
    name: &str,
    comparison: Comparison,
    threshold: &T,
) -> Result<Vec<usize>, FrameError>
where
    T: DatumValue,
    S: HasColumns + HasRows + ?Sized,
{
    let index = typed_column_index::<T, _>(source, name)?;
    let mut positions = Vec::new();
    for position in 0..source.row_count() {
        let datum = source.datum(position, index);
        let value = get_datum_value::<T>(&datum, name)?;
        if compare_to_threshold(comparison, threshold, value) {
            positions.push(position);
        }
    }
    Ok(positions)
}

/// Copy the row at `position` into a standalone [`DataRow`].
pub fn materialize_row<S: HasRows + HasColumns + ?Sized>(source: &S, position: usize) -> DataRow {
    DataRow::with_columns(
        source.row_id(position),
        (0..source.column_count()).map(|c| source.datum(position, c).into_owned()),
    )
}

/// Positions `0..len` stably sorted by `cmp`.
///
/// The result is a gather order: element `k` is the position whose row
/// belongs at `k`.
pub fn sorted_positions(len: usize, mut cmp: impl FnMut(usize, usize) -> Ordering) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.sort_by(|&a, &b| cmp(a, b));
    order
}

/// Positions of `source` sorted by the named column under `cmp`.
pub fn sort_order_by<S, F>(source: &S, name: &str, mut cmp: F) -> Result<Vec<usize>, FrameError>
where
    S: HasColumns + HasRows + ?Sized,
    F: FnMut(&Datum, &Datum) -> Ordering,
{
    let index = source.column_index(name)?;
    Ok(sorted_positions(source.row_count(), |a, b| {
        cmp(&source.datum(a, index), &source.datum(b, index))
    }))
}

/// Rearrange storage in place so that position `k` ends up holding what
/// was at `order[k]`, using only pairwise swaps.
///
/// `order` must be a permutation of `0..order.len()`. The gather order is
/// inverted into destinations and each cycle is followed once, so at most
/// `n - 1` swaps are issued.
pub fn apply_permutation(order: &[usize], mut swap: impl FnMut(usize, usize)) {
    let mut dest = vec![0usize; order.len()];
    for (target, &source) in order.iter().enumerate() {
        dest[source] = target;
    }
    for i in 0..dest.len() {
        while dest[i] != i {
            let j = dest[i];
            swap(i, j);
            dest.swap(i, j);
        }
    }
}
