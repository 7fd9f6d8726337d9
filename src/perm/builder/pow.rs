use crate::perm::{
    builder::PermBuilder,
    Permutation,
};

/// A lazy power of a builder: `Pow(inner, e)` represents `inner^e` without
/// eagerly exponentiating until [`PermBuilder::collapse`] is called.
#[derive(Debug, Clone)]
pub struct Pow<A> {
    inner: A,
    exponent: isize,
}

impl<A> Pow<A> {
    pub fn new(inner: A, exponent: isize) -> Self {
        Self { inner, exponent }
    }
}

impl<P, A> PermBuilder<P> for Pow<A>
where
    P: Permutation,
    A: PermBuilder<P>,
{
    fn build_apply(&self, x: usize) -> usize {
        self.collapse().image(x)
    }

    fn collapse(&self) -> P {
        self.inner.collapse().pow(self.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::impls::Perm;

    #[test]
    fn pow_matches_direct_power() {
        let a = Perm::from_images(&[1, 2, 0]).unwrap();
        let lazy = Pow::new(a.clone(), 2);
        let direct = a.pow(2);
        for x in 0..3 {
            assert_eq!(lazy.build_apply(x), direct.image(x));
        }
    }

    #[test]
    fn negative_pow_is_inverse_power() {
        let a = Perm::from_images(&[1, 2, 0]).unwrap();
        let lazy = Pow::new(a.clone(), -1);
        assert!(crate::perm::perm_eq(&lazy.collapse(), &a.inverse()));
    }
}
