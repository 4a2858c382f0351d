//! # Combinator Module / 组合器模块
//!
//! Builds the cartesian product of per-parameter value domains. The first
//! domain varies slowest and the last varies fastest, so for `[1, 2]` and
//! `["x", "y"]` the order is `(1,"x") (1,"y") (2,"x") (2,"y")`.
//!
//! 构建各参数值域的笛卡尔积。第一个值域变化最慢，最后一个变化最快。
//!
//! [`Combinations`] produces the tuples lazily, so callers that only need a
//! prefix never pay for the whole product.

use std::iter::FusedIterator;

use crate::core::models::{Combination, Value, ValueDomain};

/// A lazy odometer over borrowed value domains.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    domains: Vec<&'a [Value]>,
    cursor: Vec<usize>,
    exhausted: bool,
}

impl<'a> Combinations<'a> {
    /// Creates the product of `domains`, in order.
    ///
    /// With no domains, yields a single empty tuple. With any empty domain,
    /// yields nothing.
    pub fn new(domains: Vec<&'a [Value]>) -> Self {
        let exhausted = domains.iter().any(|domain| domain.is_empty());
        let cursor = vec![0; domains.len()];
        Self {
            domains,
            cursor,
            exhausted,
        }
    }

    pub fn from_domains(domains: &'a [ValueDomain]) -> Self {
        Self::new(domains.iter().map(Vec::as_slice).collect())
    }

    /// The full size of the product, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.domains
            .iter()
            .fold(1usize, |acc, domain| acc.saturating_mul(domain.len()))
    }

    fn advance(&mut self) {
        // Odometer step: bump the last position, carrying leftwards.
        for position in (0..self.cursor.len()).rev() {
            self.cursor[position] += 1;
            if self.cursor[position] < self.domains[position].len() {
                return;
            }
            self.cursor[position] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let tuple = self
            .cursor
            .iter()
            .zip(&self.domains)
            .map(|(&index, domain)| domain[index].clone())
            .collect();
        self.advance();
        Some(tuple)
    }
}

impl FusedIterator for Combinations<'_> {}

/// Materialises the full cartesian product of `domains`.
///
/// # Examples
/// ```
/// use unitcheck::core::combinator::product;
/// use unitcheck::core::models::Value;
///
/// let a = vec![Value::from(1), Value::from(2)];
/// let b = vec![Value::from("x"), Value::from("y")];
/// let tuples = product(&[a, b]);
/// assert_eq!(tuples[1], vec![Value::from(1), Value::from("y")]);
/// assert_eq!(tuples.len(), 4);
/// ```
pub fn product(domains: &[ValueDomain]) -> Vec<Combination> {
    Combinations::from_domains(domains).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> ValueDomain {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn test_total_matches_iteration_count() {
        let domains = vec![ints(&[1, 2, 3]), ints(&[4, 5]), ints(&[6])];
        let combinations = Combinations::from_domains(&domains);
        assert_eq!(combinations.total(), 6);
        assert_eq!(combinations.count(), 6);
    }

    #[test]
    fn test_single_domain_yields_singletons() {
        let domains = vec![ints(&[7, 8])];
        assert_eq!(
            product(&domains),
            vec![vec![Value::Int(7)], vec![Value::Int(8)]]
        );
    }

    #[test]
    fn test_iterator_is_fused() {
        let domains = vec![ints(&[1])];
        let mut combinations = Combinations::from_domains(&domains);
        assert!(combinations.next().is_some());
        assert!(combinations.next().is_none());
        assert!(combinations.next().is_none());
    }
}
