//! Column-set arithmetic over header names.

/// The position of the first column named `target`, if any.
#[inline]
pub fn index_of<'a, I>(names: I, target: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().position(|name| name == target)
}

/// `names` without every column named `target`, order preserved.
pub fn remove<'a, I>(names: I, target: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().filter(|name| *name != target).collect()
}
