//! Structural building blocks shared by every parser shape.
//!
//! Two families live here:
//! * Capability slots ([`Unset`] / [`Set`]), which record at the type level whether a
//!   leaf carries a default value, an implicit value, a custom parser, or a custom hint.
//! * A heterogeneous list ([`Cons`] / [`Nil`]) used to store the members of a compound.
//!   Appending to or concatenating these lists is what keeps repeated combination flat.

/// An absent capability slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unset;

/// A filled capability slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Set<V>(pub(crate) V);

/// The empty end of a heterogeneous list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

/// A heterogeneous list node: a head element followed by the remaining list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cons<H, T>(pub H, pub T);

/// Concatenate two heterogeneous lists, preserving the order of both.
pub trait Concat<R> {
    /// The flattened list.
    type Output;

    /// Place `rhs` after every element of `self`.
    fn concat(self, rhs: R) -> Self::Output;
}

impl<R> Concat<R> for Nil {
    type Output = R;

    fn concat(self, rhs: R) -> Self::Output {
        rhs
    }
}

impl<H, T, R> Concat<R> for Cons<H, T>
where
    T: Concat<R>,
{
    type Output = Cons<H, T::Output>;

    fn concat(self, rhs: R) -> Self::Output {
        let Cons(head, tail) = self;
        Cons(head, tail.concat(rhs))
    }
}

/// Shorthand for the list produced by appending `X` to `L`.
pub type Appended<L, X> = <L as Concat<Cons<X, Nil>>>::Output;

pub(crate) fn append<L, X>(list: L, item: X) -> Appended<L, X>
where
    L: Concat<Cons<X, Nil>>,
{
    list.concat(Cons(item, Nil))
}

/// Conversion of a heterogeneous list of values into the equivalent flat tuple.
pub trait Tupled {
    /// The tuple with one position per list element.
    type Tuple;

    /// Flatten into a tuple.
    fn tupled(self) -> Self::Tuple;
}

macro_rules! hlist_type {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => { Cons<$head, hlist_type!($($tail),*)> };
}

macro_rules! hlist_pat {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => { Cons($head, hlist_pat!($($tail),*)) };
}

macro_rules! impl_tupled {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty),+> Tupled for hlist_type!($($ty),+) {
            type Tuple = ($($ty,)+);

            fn tupled(self) -> Self::Tuple {
                let hlist_pat!($($var),+) = self;
                ($($var,)+)
            }
        }
    };
}

impl Tupled for Nil {
    type Tuple = ();

    fn tupled(self) -> Self::Tuple {}
}

impl_tupled!(A a);
impl_tupled!(A a, B b);
impl_tupled!(A a, B b, C c);
impl_tupled!(A a, B b, C c, D d);
impl_tupled!(A a, B b, C c, D d, E e);
impl_tupled!(A a, B b, C c, D d, E e, F f);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l, M m);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l, M m, N n);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l, M m, N n, O o);
impl_tupled!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j, K k, L l, M m, N n, O o, P p);
