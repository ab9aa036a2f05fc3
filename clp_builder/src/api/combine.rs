//! The `|` algebra.
//!
//! The category of each operand decides the shape of the result, and same-category
//! operands are always flattened into one compound rather than nested.

use std::ops::BitOr;

use crate::api::command::*;
use crate::api::compound::*;
use crate::api::core::{Empty, Map, MapInto};
use crate::api::parameter::{Arg, Opt};
use crate::model::{append, Appended, Concat, Cons, Nil};

/// Shapes which contribute named options to a compound.
#[doc(hidden)]
pub trait IntoOptions {
    /// The options, as a list.
    type List;

    /// Surrender the options.
    fn into_options(self) -> Self::List;
}

impl<T, D, I, C, H> IntoOptions for Opt<T, D, I, C, H> {
    type List = Cons<Self, Nil>;

    fn into_options(self) -> Self::List {
        Cons(self, Nil)
    }
}

impl<L> IntoOptions for CompoundOption<L> {
    type List = L;

    fn into_options(self) -> Self::List {
        self.0
    }
}

/// Shapes which contribute positional arguments to a compound.
#[doc(hidden)]
pub trait IntoArguments {
    /// The arguments, as a list.
    type List;

    /// Surrender the arguments.
    fn into_arguments(self) -> Self::List;
}

impl<T, D, C, H> IntoArguments for Arg<T, D, C, H> {
    type List = Cons<Self, Nil>;

    fn into_arguments(self) -> Self::List {
        Cons(self, Nil)
    }
}

impl<L> IntoArguments for CompoundArgument<L> {
    type List = L;

    fn into_arguments(self) -> Self::List {
        self.0
    }
}

/// Marker for parsers which may serve as the fallback of a [`CommandWithImplicitCommand`].
///
/// Implement it for your own [`Parser`](crate::Parser) to combine it with commands via `|`.
pub trait Implicit {}

impl<T, D, I, C, H> Implicit for Opt<T, D, I, C, H> {}
impl<T, D, C, H> Implicit for Arg<T, D, C, H> {}
impl<L> Implicit for CompoundOption<L> {}
impl<L> Implicit for CompoundArgument<L> {}
impl<LA, LO> Implicit for CompoundParser<LA, LO> {}
impl<P, L> Implicit for CommandWithSharedOptions<P, L> {}
impl<P, F> Implicit for Map<P, F> {}
impl<P, U> Implicit for MapInto<P, U> {}
impl Implicit for Empty {}

// Options on the left.

impl<T, D, I, C, H, R> BitOr<R> for Opt<T, D, I, C, H>
where
    R: IntoOptions,
{
    type Output = CompoundOption<Cons<Self, R::List>>;

    fn bitor(self, rhs: R) -> Self::Output {
        CompoundOption(Cons(self, rhs.into_options()))
    }
}

impl<T, D, I, C, H, U, E, K, G> BitOr<Arg<U, E, K, G>> for Opt<T, D, I, C, H> {
    type Output = CompoundParser<Cons<Arg<U, E, K, G>, Nil>, Cons<Self, Nil>>;

    fn bitor(self, rhs: Arg<U, E, K, G>) -> Self::Output {
        CompoundParser {
            arguments: Cons(rhs, Nil),
            options: Cons(self, Nil),
        }
    }
}

impl<T, D, I, C, H, LA> BitOr<CompoundArgument<LA>> for Opt<T, D, I, C, H> {
    type Output = CompoundParser<LA, Cons<Self, Nil>>;

    fn bitor(self, rhs: CompoundArgument<LA>) -> Self::Output {
        CompoundParser {
            arguments: rhs.0,
            options: Cons(self, Nil),
        }
    }
}

impl<T, D, I, C, H, LA, LO> BitOr<CompoundParser<LA, LO>> for Opt<T, D, I, C, H> {
    type Output = CompoundParser<LA, Cons<Self, LO>>;

    fn bitor(self, rhs: CompoundParser<LA, LO>) -> Self::Output {
        CompoundParser {
            arguments: rhs.arguments,
            options: Cons(self, rhs.options),
        }
    }
}

impl<L, R> BitOr<R> for CompoundOption<L>
where
    R: IntoOptions,
    L: Concat<R::List>,
{
    type Output = CompoundOption<L::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        CompoundOption(self.0.concat(rhs.into_options()))
    }
}

impl<L, U, E, K, G> BitOr<Arg<U, E, K, G>> for CompoundOption<L> {
    type Output = CompoundParser<Cons<Arg<U, E, K, G>, Nil>, L>;

    fn bitor(self, rhs: Arg<U, E, K, G>) -> Self::Output {
        CompoundParser {
            arguments: Cons(rhs, Nil),
            options: self.0,
        }
    }
}

impl<L, LA> BitOr<CompoundArgument<LA>> for CompoundOption<L> {
    type Output = CompoundParser<LA, L>;

    fn bitor(self, rhs: CompoundArgument<LA>) -> Self::Output {
        CompoundParser {
            arguments: rhs.0,
            options: self.0,
        }
    }
}

impl<L, LA, LO> BitOr<CompoundParser<LA, LO>> for CompoundOption<L>
where
    L: Concat<LO>,
{
    type Output = CompoundParser<LA, L::Output>;

    fn bitor(self, rhs: CompoundParser<LA, LO>) -> Self::Output {
        CompoundParser {
            arguments: rhs.arguments,
            options: self.0.concat(rhs.options),
        }
    }
}

// Arguments on the left.

impl<T, D, C, H, R> BitOr<R> for Arg<T, D, C, H>
where
    R: IntoArguments,
{
    type Output = CompoundArgument<Cons<Self, R::List>>;

    fn bitor(self, rhs: R) -> Self::Output {
        CompoundArgument(Cons(self, rhs.into_arguments()))
    }
}

impl<T, D, C, H, U, E, J, K, G> BitOr<Opt<U, E, J, K, G>> for Arg<T, D, C, H> {
    type Output = CompoundParser<Cons<Self, Nil>, Cons<Opt<U, E, J, K, G>, Nil>>;

    fn bitor(self, rhs: Opt<U, E, J, K, G>) -> Self::Output {
        CompoundParser {
            arguments: Cons(self, Nil),
            options: Cons(rhs, Nil),
        }
    }
}

impl<T, D, C, H, LO> BitOr<CompoundOption<LO>> for Arg<T, D, C, H> {
    type Output = CompoundParser<Cons<Self, Nil>, LO>;

    fn bitor(self, rhs: CompoundOption<LO>) -> Self::Output {
        CompoundParser {
            arguments: Cons(self, Nil),
            options: rhs.0,
        }
    }
}

impl<T, D, C, H, LA, LO> BitOr<CompoundParser<LA, LO>> for Arg<T, D, C, H> {
    type Output = CompoundParser<Cons<Self, LA>, LO>;

    fn bitor(self, rhs: CompoundParser<LA, LO>) -> Self::Output {
        CompoundParser {
            arguments: Cons(self, rhs.arguments),
            options: rhs.options,
        }
    }
}

impl<L, R> BitOr<R> for CompoundArgument<L>
where
    R: IntoArguments,
    L: Concat<R::List>,
{
    type Output = CompoundArgument<L::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        CompoundArgument(self.0.concat(rhs.into_arguments()))
    }
}

impl<L, U, E, J, K, G> BitOr<Opt<U, E, J, K, G>> for CompoundArgument<L> {
    type Output = CompoundParser<L, Cons<Opt<U, E, J, K, G>, Nil>>;

    fn bitor(self, rhs: Opt<U, E, J, K, G>) -> Self::Output {
        CompoundParser {
            arguments: self.0,
            options: Cons(rhs, Nil),
        }
    }
}

impl<L, LO> BitOr<CompoundOption<LO>> for CompoundArgument<L> {
    type Output = CompoundParser<L, LO>;

    fn bitor(self, rhs: CompoundOption<LO>) -> Self::Output {
        CompoundParser {
            arguments: self.0,
            options: rhs.0,
        }
    }
}

impl<L, LA, LO> BitOr<CompoundParser<LA, LO>> for CompoundArgument<L>
where
    L: Concat<LA>,
{
    type Output = CompoundParser<L::Output, LO>;

    fn bitor(self, rhs: CompoundParser<LA, LO>) -> Self::Output {
        CompoundParser {
            arguments: self.0.concat(rhs.arguments),
            options: rhs.options,
        }
    }
}

// Mixed compounds on the left.

impl<LA, LO, R> BitOr<R> for CompoundParser<LA, LO>
where
    R: IntoOptions,
    LO: Concat<R::List>,
{
    type Output = CompoundParser<LA, LO::Output>;

    fn bitor(self, rhs: R) -> Self::Output {
        CompoundParser {
            arguments: self.arguments,
            options: self.options.concat(rhs.into_options()),
        }
    }
}

impl<LA, LO, U, E, K, G> BitOr<Arg<U, E, K, G>> for CompoundParser<LA, LO>
where
    LA: Concat<Cons<Arg<U, E, K, G>, Nil>>,
{
    type Output = CompoundParser<Appended<LA, Arg<U, E, K, G>>, LO>;

    fn bitor(self, rhs: Arg<U, E, K, G>) -> Self::Output {
        CompoundParser {
            arguments: append(self.arguments, rhs),
            options: self.options,
        }
    }
}

impl<LA, LO, L> BitOr<CompoundArgument<L>> for CompoundParser<LA, LO>
where
    LA: Concat<L>,
{
    type Output = CompoundParser<LA::Output, LO>;

    fn bitor(self, rhs: CompoundArgument<L>) -> Self::Output {
        CompoundParser {
            arguments: self.arguments.concat(rhs.0),
            options: self.options,
        }
    }
}

impl<LA, LO, RA, RO> BitOr<CompoundParser<RA, RO>> for CompoundParser<LA, LO>
where
    LA: Concat<RA>,
    LO: Concat<RO>,
{
    type Output = CompoundParser<LA::Output, LO::Output>;

    fn bitor(self, rhs: CompoundParser<RA, RO>) -> Self::Output {
        CompoundParser {
            arguments: self.arguments.concat(rhs.arguments),
            options: self.options.concat(rhs.options),
        }
    }
}

// Commands on the left.

impl<P, Q> BitOr<Command<Q>> for Command<P> {
    type Output = CommandSelector<Cons<Command<P>, Cons<Command<Q>, Nil>>>;

    fn bitor(self, rhs: Command<Q>) -> Self::Output {
        CommandSelector(Cons(self, Cons(rhs, Nil)))
    }
}

impl<P, L> BitOr<CommandSelector<L>> for Command<P> {
    type Output = CommandSelector<Cons<Command<P>, L>>;

    fn bitor(self, rhs: CommandSelector<L>) -> Self::Output {
        CommandSelector(Cons(self, rhs.0))
    }
}

impl<P, X> BitOr<X> for Command<P>
where
    X: Implicit,
{
    type Output = CommandWithImplicitCommand<Cons<Command<P>, Nil>, X>;

    fn bitor(self, rhs: X) -> Self::Output {
        CommandWithImplicitCommand {
            commands: Cons(self, Nil),
            implicit: rhs,
        }
    }
}

impl<L, Q> BitOr<Command<Q>> for CommandSelector<L>
where
    L: Concat<Cons<Command<Q>, Nil>>,
{
    type Output = CommandSelector<Appended<L, Command<Q>>>;

    fn bitor(self, rhs: Command<Q>) -> Self::Output {
        CommandSelector(append(self.0, rhs))
    }
}

impl<L, R> BitOr<CommandSelector<R>> for CommandSelector<L>
where
    L: Concat<R>,
{
    type Output = CommandSelector<L::Output>;

    fn bitor(self, rhs: CommandSelector<R>) -> Self::Output {
        CommandSelector(self.0.concat(rhs.0))
    }
}

impl<L, X> BitOr<X> for CommandSelector<L>
where
    X: Implicit,
{
    type Output = CommandWithImplicitCommand<L, X>;

    fn bitor(self, rhs: X) -> Self::Output {
        CommandWithImplicitCommand {
            commands: self.0,
            implicit: rhs,
        }
    }
}

// Shared options on the left.

impl<P, Q> BitOr<Command<Q>> for SharedOptions<P> {
    type Output = CommandWithSharedOptions<P, Cons<Command<Q>, Nil>>;

    fn bitor(self, rhs: Command<Q>) -> Self::Output {
        CommandWithSharedOptions {
            shared: self.0,
            commands: Cons(rhs, Nil),
        }
    }
}

impl<P, L> BitOr<CommandSelector<L>> for SharedOptions<P> {
    type Output = CommandWithSharedOptions<P, L>;

    fn bitor(self, rhs: CommandSelector<L>) -> Self::Output {
        CommandWithSharedOptions {
            shared: self.0,
            commands: rhs.0,
        }
    }
}

impl<P, L, Q> BitOr<Command<Q>> for CommandWithSharedOptions<P, L>
where
    L: Concat<Cons<Command<Q>, Nil>>,
{
    type Output = CommandWithSharedOptions<P, Appended<L, Command<Q>>>;

    fn bitor(self, rhs: Command<Q>) -> Self::Output {
        CommandWithSharedOptions {
            shared: self.shared,
            commands: append(self.commands, rhs),
        }
    }
}

impl<P, L, R> BitOr<CommandSelector<R>> for CommandWithSharedOptions<P, L>
where
    L: Concat<R>,
{
    type Output = CommandWithSharedOptions<P, L::Output>;

    fn bitor(self, rhs: CommandSelector<R>) -> Self::Output {
        CommandWithSharedOptions {
            shared: self.shared,
            commands: self.commands.concat(rhs.0),
        }
    }
}

// Implicit command groups on the left.

impl<L, I, Q> BitOr<Command<Q>> for CommandWithImplicitCommand<L, I>
where
    L: Concat<Cons<Command<Q>, Nil>>,
{
    type Output = CommandWithImplicitCommand<Appended<L, Command<Q>>, I>;

    fn bitor(self, rhs: Command<Q>) -> Self::Output {
        CommandWithImplicitCommand {
            commands: append(self.commands, rhs),
            implicit: self.implicit,
        }
    }
}

impl<L, I, X> BitOr<X> for CommandWithImplicitCommand<L, I>
where
    X: Implicit,
    I: BitOr<X>,
{
    type Output = CommandWithImplicitCommand<L, I::Output>;

    fn bitor(self, rhs: X) -> Self::Output {
        CommandWithImplicitCommand {
            commands: self.commands,
            implicit: self.implicit | rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{arg, flag, nothing, opt, Parser};
    use crate::choice::OneOf2;
    use crate::parser::ParseError;

    #[test]
    fn options_then_arguments() {
        // Setup
        let parser = opt::<u8>().pattern("-a")
            | arg::<u8>("x")
            | (opt::<u8>().pattern("-b") | opt::<u8>().pattern("-c"))
            | (arg::<u8>("y") | arg::<u8>("z"));

        // Execute
        let result = parser.parse_tokens(&["1", "2", "3", "-c=6", "-a=4", "-b=5"]);

        // Verify
        assert_eq!(result, Ok((1, 2, 3, 4, 5, 6)));
    }

    #[test]
    fn compound_argument_with_options() {
        // Setup
        let arguments = arg::<u8>("x") | arg::<u8>("y");
        let options = opt::<u8>().pattern("-a") | opt::<u8>().pattern("-b");

        // Execute
        let result = (arguments | options).parse_tokens(&["1", "2", "-b=4", "-a=3"]);

        // Verify
        assert_eq!(result, Ok((1, 2, 3, 4)));
    }

    #[test]
    fn leaf_into_compound_parser() {
        // Setup
        let mixed = || arg::<u8>("y") | opt::<u8>().pattern("-b");
        let with_option = opt::<u8>().pattern("-a") | mixed();
        let with_argument = arg::<u8>("x") | mixed();
        let with_options = (opt::<u8>().pattern("-a") | opt::<u8>().pattern("-c")) | mixed();
        let with_arguments = (arg::<u8>("x") | arg::<u8>("z")) | mixed();

        // Execute & Verify
        assert_eq!(with_option.parse_tokens(&["2", "-b=4", "-a=3"]), Ok((2, 3, 4)));
        assert_eq!(with_argument.parse_tokens(&["1", "2", "-b=4"]), Ok((1, 2, 4)));
        assert_eq!(
            with_options.parse_tokens(&["2", "-c=5", "-b=4", "-a=3"]),
            Ok((2, 3, 5, 4))
        );
        assert_eq!(
            with_arguments.parse_tokens(&["1", "3", "2", "-b=4"]),
            Ok((1, 3, 2, 4))
        );
    }

    #[test]
    fn implicit_same_type_kept_apart() {
        // Setup
        let parser = Command::new("help", "Print help.", nothing()) | nothing();

        // Execute & Verify
        assert_eq!(parser.parse_tokens(&["help"]), Ok(OneOf2::First(())));
        assert_eq!(parser.parse_tokens(&[]), Ok(OneOf2::Second(())));
    }

    #[test]
    fn implicit_mapped() {
        // Setup
        let parser = Command::new("help", "Print help.", nothing())
            | (opt::<u32>().pattern("-w") | opt::<u32>().pattern("-h")).map(|(w, h)| w * h);

        // Execute & Verify
        assert_eq!(parser.parse_tokens(&["-w=2", "-h=3"]), Ok(OneOf2::Second(6)));
        assert_eq!(parser.parse_tokens(&["help"]), Ok(OneOf2::First(())));
    }

    #[test]
    fn implicit_extended() {
        // Setup
        let parser = (Command::new("a", "", nothing()) | Command::new("b", "", nothing()))
            | flag().pattern("-x")
            | (flag().pattern("-y") | flag().pattern("-z"));

        // Execute
        let result = parser.parse_tokens(&["-z", "-x"]);

        // Verify
        assert_eq!(
            result.map(|union| union.index()),
            Ok(2)
        );
        assert_eq!(
            parser.parse_tokens(&["-y"]).map(|union| union.index()),
            Ok(2)
        );
        assert_eq!(
            parser.parse_tokens(&["b", "-y"]),
            Err(ParseError::UnrecognizedArgument("-y".to_string()))
        );
    }

    #[test]
    fn shared_options_with_selector() {
        // Setup
        let commands = Command::new("a", "", nothing()) | Command::new("b", "", nothing());
        let parser = SharedOptions::new(flag().pattern("-v"))
            | commands
            | (Command::new("c", "", nothing()) | Command::new("d", "", nothing()));

        // Execute
        let result = parser.parse_tokens(&["-v", "d"]);

        // Verify
        let WithShared { shared, command } = result.unwrap();
        assert!(shared);
        assert_eq!(command.index(), 3);
    }
}
