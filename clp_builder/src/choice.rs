//! Tagged unions for command results.
//!
//! Internally a command group produces a nested [`Choice`] terminated by [`Void`].
//! At the parser boundary that nesting is flattened into one of the `OneOfN` enums, so a
//! caller matches on `OneOf2::First(..)` / `OneOf2::Second(..)` rather than walking the
//! nesting by hand.

/// The uninhabited end of a [`Choice`] chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Void {}

/// One step of a nested union: either the alternative at this position, or a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<H, T> {
    /// The alternative at this position.
    Here(H),
    /// One of the later alternatives.
    There(T),
}

/// Widen a union by one trailing alternative `X`.
pub trait Widen<X> {
    /// The union with `X` appended as its last alternative.
    type Output;

    /// Re-tag a value of the narrower union.
    fn widen(self) -> Self::Output;

    /// Tag a value of the new trailing alternative.
    fn last(value: X) -> Self::Output;
}

impl<X> Widen<X> for Void {
    type Output = Choice<X, Void>;

    fn widen(self) -> Self::Output {
        match self {}
    }

    fn last(value: X) -> Self::Output {
        Choice::Here(value)
    }
}

impl<H, T, X> Widen<X> for Choice<H, T>
where
    T: Widen<X>,
{
    type Output = Choice<H, T::Output>;

    fn widen(self) -> Self::Output {
        match self {
            Choice::Here(head) => Choice::Here(head),
            Choice::There(tail) => Choice::There(tail.widen()),
        }
    }

    fn last(value: X) -> Self::Output {
        Choice::There(T::last(value))
    }
}

/// Conversion of a nested [`Choice`] into the equivalent flat `OneOfN` enum.
pub trait Tagged {
    /// The flat enum.
    type Union;

    /// Flatten into the enum.
    fn tagged(self) -> Self::Union;
}

macro_rules! choice_type {
    () => { Void };
    ($head:ident $(, $tail:ident)*) => { Choice<$head, choice_type!($($tail),*)> };
}

macro_rules! unfold {
    ($value:expr; $union:ident;) => {
        match $value {}
    };
    ($value:expr; $union:ident; $variant:ident $(, $rest:ident)*) => {
        match $value {
            Choice::Here(inner) => $union::$variant(inner),
            Choice::There(rest) => unfold!(rest; $union; $($rest),*),
        }
    };
}

macro_rules! one_of {
    ($(#[$doc:meta])* $union:ident; $($index:literal $ty:ident $variant:ident),+) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $union<$($ty),+> {
            $(
                #[doc = concat!("The alternative at position ", stringify!($index), ".")]
                $variant($ty)
            ),+
        }

        impl<$($ty),+> $union<$($ty),+> {
            /// The zero-based position of the alternative held, in declaration order.
            pub fn index(&self) -> usize {
                match self {
                    $($union::$variant(_) => $index),+
                }
            }
        }

        impl<$($ty),+> Tagged for choice_type!($($ty),+) {
            type Union = $union<$($ty),+>;

            fn tagged(self) -> Self::Union {
                unfold!(self; $union; $($variant),+)
            }
        }
    };
}

one_of!(
    /// The result of a group with a single alternative.
    OneOf1; 0 A First
);
one_of!(
    /// The result of a group with two alternatives.
    OneOf2; 0 A First, 1 B Second
);
one_of!(
    /// The result of a group with three alternatives.
    OneOf3; 0 A First, 1 B Second, 2 C Third
);
one_of!(
    /// The result of a group with four alternatives.
    OneOf4; 0 A First, 1 B Second, 2 C Third, 3 D Fourth
);
one_of!(
    /// The result of a group with five alternatives.
    OneOf5; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth
);
one_of!(
    /// The result of a group with six alternatives.
    OneOf6; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth, 5 F Sixth
);
one_of!(
    /// The result of a group with seven alternatives.
    OneOf7; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth, 5 F Sixth, 6 G Seventh
);
one_of!(
    /// The result of a group with eight alternatives.
    OneOf8; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth, 5 F Sixth, 6 G Seventh,
    7 H Eighth
);
one_of!(
    /// The result of a group with nine alternatives.
    OneOf9; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth, 5 F Sixth, 6 G Seventh,
    7 H Eighth, 8 I Ninth
);
one_of!(
    /// The result of a group with ten alternatives.
    OneOf10; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth, 5 F Sixth, 6 G Seventh,
    7 H Eighth, 8 I Ninth, 9 J Tenth
);
