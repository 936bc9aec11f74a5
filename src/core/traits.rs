//! Core linear-algebra traits for banded-solve.

use num_traits::Float;

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd + From<f64>;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
    /// Compute ‖x‖₁.
    fn norm_l1(&self, x: &V) -> Self::Scalar;
}

/// Row count of an operator.
pub trait Indexing {
    /// Number of rows.
    fn nrows(&self) -> usize;
}

/// Residual r = A x − b and its norms.
///
/// Blanket-implemented for every operator that can multiply a `Vec<T>`.
pub trait Residual<T> {
    /// Compute r = A x − b.
    fn residual(&self, x: &[T], b: &[T]) -> Vec<T>;

    /// ‖A x − b‖₁, the sum of absolute residual components.
    fn residual_norm_l1(&self, x: &[T], b: &[T]) -> T;

    /// ‖A x − b‖₂, the Euclidean norm of the residual.
    fn residual_norm_l2(&self, x: &[T], b: &[T]) -> T;
}

impl<M, T> Residual<T> for M
where
    M: MatVec<Vec<T>> + Indexing,
    T: Float + From<f64>,
{
    fn residual(&self, x: &[T], b: &[T]) -> Vec<T> {
        let mut ax = vec![T::zero(); self.nrows()];
        self.matvec(&x.to_vec(), &mut ax);
        ax.iter().zip(b).map(|(&axi, &bi)| axi - bi).collect()
    }

    fn residual_norm_l1(&self, x: &[T], b: &[T]) -> T {
        let ip = ();
        ip.norm_l1(&self.residual(x, b))
    }

    fn residual_norm_l2(&self, x: &[T], b: &[T]) -> T {
        let ip = ();
        ip.norm(&self.residual(x, b))
    }
}
