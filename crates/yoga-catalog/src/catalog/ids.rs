use crate::catalog::record::YogaCategory;

/// Hands out `<PREFIX>_<counter>` ids within one category band.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    category: YogaCategory,
    next: u32,
}

impl IdAllocator {
    pub fn new(category: YogaCategory) -> Self {
        Self {
            category,
            next: category.first_counter(),
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}_{:03}", self.category.id_prefix(), self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u32 {
        self.next - self.category.first_counter()
    }
}
