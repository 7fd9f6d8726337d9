use crate::perm::{
    builder::PermBuilder,
    Permutation,
};

/// A lazy composition of two builders: `Join(a, b)` represents `a.op(b)`
/// without eagerly multiplying until [`PermBuilder::collapse`] is called.
#[derive(Debug, Clone)]
pub struct Join<A, B> {
    first: A,
    second: B,
}

impl<A, B> Join<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<P, A, B> PermBuilder<P> for Join<A, B>
where
    P: Permutation,
    A: PermBuilder<P>,
    B: PermBuilder<P>,
{
    fn build_apply(&self, x: usize) -> usize {
        // Right-action convention: k · (g · h) = (k · g) · h.
        self.second.build_apply(self.first.build_apply(x))
    }

    fn collapse(&self) -> P {
        self.first.collapse().op(&self.second.collapse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::impls::Perm;

    #[test]
    fn join_matches_direct_composition() {
        let a = Perm::from_images(&[1, 2, 0]).unwrap();
        let b = Perm::from_images(&[0, 2, 1]).unwrap();
        let joined = Join::new(a.clone(), b.clone());
        let direct = a.op(&b);
        for x in 0..3 {
            assert_eq!(joined.build_apply(x), direct.image(x));
        }
        assert!(crate::perm::perm_eq(&joined.collapse(), &direct));
    }
}
