use std::fmt;
use std::marker::PhantomData;

use ::serde::de::{SeqAccess, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ArrayDeque, Deque, LinkedDeque};

impl<T: Serialize> Serialize for ArrayDeque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

impl<T: Serialize> Serialize for LinkedDeque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

/// Fills any deque from a sequence, appending at the back.
struct SeqVisitor<T, D> {
    marker: PhantomData<(T, D)>,
}

impl<'de, T, D> Visitor<'de> for SeqVisitor<T, D>
where
    T: Deserialize<'de>,
    D: Deque<T> + Default,
{
    type Value = D;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut deque = D::default();

        while let Some(value) = seq.next_element()? {
            deque.add_last(value);
        }

        Ok(deque)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayDeque<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor {
            marker: PhantomData,
        })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedDeque<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor {
            marker: PhantomData,
        })
    }
}
