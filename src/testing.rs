// This module contains strategies and shrinkers for:
//  * points
//  * point clouds for triangulation properties
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use num::BigRational;
use ordered_float::NotNan;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::test_runner::*;
use std::convert::TryInto;
use std::fmt::Debug;
use std::ops::Index;
use std::ops::IndexMut;
use std::ops::Range;

use array_init::{array_init, try_array_init};

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Shrinkable points

pub struct ShrinkablePoint<T, const N: usize> {
  point: Point<T, N>,
  shrink: usize,
  prev_shrink: Option<usize>,
}

impl<T, const N: usize> ValueTree for ShrinkablePoint<T, N>
where
  T: ValueTree,
{
  type Value = Point<<T as ValueTree>::Value, N>;
  fn current(&self) -> Point<T::Value, N> {
    Point {
      array: array_init(|i| self.point.array.index(i).current()),
    }
  }
  fn simplify(&mut self) -> bool {
    for ix in self.shrink..N {
      if !self.point.array.index_mut(ix).simplify() {
        self.shrink = ix + 1;
      } else {
        self.prev_shrink = Some(ix);
        return true;
      }
    }
    false
  }
  fn complicate(&mut self) -> bool {
    match self.prev_shrink {
      None => false,
      Some(ix) => {
        if self.point.array.index_mut(ix).complicate() {
          true
        } else {
          self.prev_shrink = None;
          false
        }
      }
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Point strategy

impl<T, const N: usize> Strategy for Point<T, N>
where
  T: Clone + Debug + Strategy,
{
  type Tree = ShrinkablePoint<T::Tree, N>;
  type Value = Point<<T as Strategy>::Value, N>;
  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let tree = ShrinkablePoint {
      point: Point {
        array: try_array_init(|i| self.array.index(i).new_tree(runner))?,
      },
      shrink: 0,
      prev_shrink: None,
    };
    Ok(tree)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Point

impl<T: Arbitrary, const N: usize> Arbitrary for Point<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Vec<T>, Point<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), N).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

// Arbitrary isn't defined for NotNan.
pub fn any_nn<const N: usize>() -> impl Strategy<Value = Point<NotNan<f64>, N>> {
  any::<Point<f64, N>>().prop_filter_map("Check for NaN", |pt| pt.cast(rem_float).try_into().ok())
}

// Float representation: mantissa * 2^exponent * sign
// This function changes the exponent modulo 250. This rules out extreme
// numbers (very large, very small, very close to zero). Such extremes
// are likely to overflow since the arbitrary precision machinery we're
// using cannot compute answers with an exponent larger than 1024.
fn rem_float(f: f64) -> f64 {
  let (mantissa, exponent, sign) = num::traits::float::FloatCore::integer_decode(f);
  ((mantissa as f64) * 2f64.powi(i32::from(exponent) % 250)).copysign(f64::from(sign))
}

/// Uniform points in a bounded square; continuous coordinates almost never
/// produce degenerate configurations.
pub fn uniform_nn(range: Range<f64>) -> impl Strategy<Value = Point<NotNan<f64>, 2>> {
  Point::new([range.clone(), range]).prop_map(|pt| pt.cast(|c| NotNan::new(c).unwrap()))
}

/// Points on a small integer lattice; duplicates, colinear runs and
/// cocircular quadruples show up constantly.
pub fn lattice_nn(limit: i32) -> impl Strategy<Value = Point<NotNan<f64>, 2>> {
  Point::new([-limit..=limit, -limit..=limit])
    .prop_map(|pt| pt.cast(|c| NotNan::new(f64::from(c)).unwrap()))
}

/// Exact-arithmetic copy of a floating-point point.
pub fn rational(p: &Point<NotNan<f64>, 2>) -> Point<BigRational, 2> {
  p.cast(|c| BigRational::from_float(c.into_inner()).unwrap())
}
