/// A key-value pair stored in a sorted table.
#[derive(Clone, Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> Entry<T, U> {
    pub fn into_pair(self) -> (T, U) {
        (self.key, self.value)
    }

    pub fn as_pair(&self) -> (&T, &U) {
        (&self.key, &self.value)
    }
}
