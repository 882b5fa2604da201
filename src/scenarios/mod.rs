/*!
Scenarios built from the library.

A scenario sets up an [interpreter](crate::interpreter::Interpreter) with some agents, a base structure, permissions, and associations, and knows which formula to announce each round.

At present there is the [muddy children](muddy) puzzle.
*/

pub mod muddy;
