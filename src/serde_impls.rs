//! Vectors and matrices serialize as flat number sequences, matrices in column-major order.

use crate::matrix::Matrix;
use crate::vec::Vector;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<const N: usize> Serialize for Vector<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Vector<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let elements = Vec::<f64>::deserialize(deserializer)?;
        Self::try_from(elements.as_slice()).map_err(D::Error::custom)
    }
}

impl<const N: usize> Serialize for Matrix<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Matrix<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let elements = Vec::<f64>::deserialize(deserializer)?;
        Self::try_from(elements.as_slice()).map_err(D::Error::custom)
    }
}
