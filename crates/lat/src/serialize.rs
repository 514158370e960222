//! `serde` support, enabled by the `serde` feature.
//!
//! A matrix serializes as a fixed-length sequence of rows, each a
//! fixed-length sequence of elements, so `Matrix<i32, 2, 2>` becomes
//! `[[1, 2], [3, 4]]` in JSON. Deserialization rejects any other shape.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, Error as _, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::matrix::Matrix;

struct RowRef<'a, T, const C: usize>(&'a [T; C]);

impl<T: Serialize, const C: usize> Serialize for RowRef<'_, T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(C)?;
        for value in self.0 {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

impl<T: Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(R)?;
        for row in self.as_rows() {
            tuple.serialize_element(&RowRef(row))?;
        }
        tuple.end()
    }
}

/// Owned row used while deserializing.
struct Row<T, const C: usize>([T; C]);

/// Visitor filling a `[T; N]` from a sequence of exactly `N` elements.
struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for ArrayVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = [T; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {N} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut slots: [Option<T>; N] = core::array::from_fn(|_| None);
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Some(
                seq.next_element()?
                    .ok_or_else(|| A::Error::invalid_length(i, &self))?,
            );
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(A::Error::invalid_length(N + 1, &self));
        }
        // Every slot was filled by the loop above.
        Ok(slots.map(|slot| match slot {
            Some(value) => value,
            None => unreachable!(),
        }))
    }
}

impl<'de, T, const C: usize> Deserialize<'de> for Row<T, C>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_tuple(C, ArrayVisitor::<T, C>(PhantomData))
            .map(Row)
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = deserializer.deserialize_tuple(R, ArrayVisitor::<Row<T, C>, R>(PhantomData))?;
        Ok(Self::from_rows(rows.map(|Row(row)| row)))
    }
}
