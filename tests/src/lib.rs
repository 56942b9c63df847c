//! Cross-crate scenarios for `pingsweep`, driven by scripted probers and resolvers.

#[cfg(test)]
mod fakes;
#[cfg(test)]
mod sweep;
