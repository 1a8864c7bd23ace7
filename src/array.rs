//! Validated array predicates, chunking, dedup, flattening, set operations.
//!
//! Every operation validates the top-level container shape before any
//! computation; the multi-array set operations validate all of their
//! arguments up front so a failure never leaves partial work behind.

use crate::error::{InvalidArgument, Result};
use crate::value::Value;

fn expect_array<'a>(function: &'static str, value: &'a Value) -> Result<&'a [Value]> {
    value
        .as_array()
        .ok_or_else(|| InvalidArgument::new(function, "an array", value))
}

fn expect_chunk_size(function: &'static str, size: usize) -> Result<()> {
    if size == 0 {
        return Err(InvalidArgument::new(
            function,
            "a positive chunk size",
            &Value::from(0),
        ));
    }
    Ok(())
}

pub fn is_empty_array(value: &Value) -> Result<bool> {
    Ok(expect_array("is_empty_array", value)?.is_empty())
}

/// Partitions into ordered chunks of `size`; the last chunk may be shorter.
pub fn chunk(value: &Value, size: usize) -> Result<Vec<Vec<Value>>> {
    let items = expect_array("chunk", value)?;
    expect_chunk_size("chunk", size)?;
    Ok(items.chunks(size).map(<[Value]>::to_vec).collect())
}

/// `ceil(len / size)`.
pub fn chunk_count(value: &Value, size: usize) -> Result<usize> {
    let items = expect_array("chunk_count", value)?;
    expect_chunk_size("chunk_count", size)?;
    Ok(items.len().div_ceil(size))
}

/// The chunk at 0-based `index`; fails when `index` is outside
/// `[0, chunk_count)`.
pub fn chunk_at(value: &Value, size: usize, index: usize) -> Result<Vec<Value>> {
    let items = expect_array("chunk_at", value)?;
    expect_chunk_size("chunk_at", size)?;
    let count = items.len().div_ceil(size);
    if index >= count {
        return Err(InvalidArgument::new(
            "chunk_at",
            format!("a chunk index below {count}"),
            &Value::from(index as i64),
        ));
    }
    let start = index * size;
    Ok(items[start..(start + size).min(items.len())].to_vec())
}

/// Stable dedup preserving first-occurrence order; `Value` equality.
pub fn unique(value: &Value) -> Result<Vec<Value>> {
    let items = expect_array("unique", value)?;
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// Flattens nested arrays up to `depth` levels; `None` flattens fully,
/// `Some(0)` is a shallow copy.
pub fn flatten(value: &Value, depth: Option<usize>) -> Result<Vec<Value>> {
    let items = expect_array("flatten", value)?;
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, depth, &mut out);
    Ok(out)
}

fn flatten_into(items: &[Value], depth: Option<usize>, out: &mut Vec<Value>) {
    for item in items {
        match (item, depth) {
            (Value::Array(nested), None) => flatten_into(nested, None, out),
            (Value::Array(nested), Some(d)) if d > 0 => flatten_into(nested, Some(d - 1), out),
            _ => out.push(item.clone()),
        }
    }
}

/// Elements of the first array not present in any later array, in the first
/// array's order. Zero arrays yields empty.
pub fn difference(arrays: &[Value]) -> Result<Vec<Value>> {
    let all = expect_arrays("difference", arrays)?;
    let Some((first, rest)) = all.split_first() else {
        return Ok(Vec::new());
    };
    let mut out = Vec::new();
    for item in first.iter() {
        if !rest.iter().any(|other| other.contains(item)) {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// Elements common to all given arrays (by membership, not frequency), in
/// the first array's order. Zero arrays yields empty.
pub fn intersection(arrays: &[Value]) -> Result<Vec<Value>> {
    let all = expect_arrays("intersection", arrays)?;
    let Some((first, rest)) = all.split_first() else {
        return Ok(Vec::new());
    };
    let mut out = Vec::new();
    for item in first.iter() {
        if rest.iter().all(|other| other.contains(item)) {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// All distinct elements across all arrays, in first-occurrence order,
/// scanning arrays in argument order.
pub fn union(arrays: &[Value]) -> Result<Vec<Value>> {
    let all = expect_arrays("union", arrays)?;
    let mut out = Vec::new();
    for items in all {
        for item in items {
            if !out.contains(item) {
                out.push(item.clone());
            }
        }
    }
    Ok(out)
}

fn expect_arrays<'a>(function: &'static str, arrays: &'a [Value]) -> Result<Vec<&'a [Value]>> {
    arrays
        .iter()
        .map(|value| expect_array(function, value))
        .collect()
}
