mod builder;
mod parse;
mod usage;
