use serde::{Deserialize, Serialize};

/// A product as offered to the cart, before it has a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    pub fn into_line(self, quantity: u32) -> CartLine {
        CartLine {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Ordered cart snapshot. Ids are unique and insertion order is kept.
///
/// Transitions never mutate in place: each returns the next snapshot so the
/// store can persist it before publishing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<CartLine>);

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.0
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.0.iter().find(|line| line.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.0.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(CartLine::subtotal).sum()
    }

    /// Appends a new line with quantity 1, or increments the existing line
    /// with the same id.
    pub fn with_added(&self, product: Product) -> Cart {
        if self.contains(&product.id) {
            return self.with_incremented(&product.id);
        }

        let mut lines = self.0.clone();
        lines.push(product.into_line(1));
        Cart(lines)
    }

    pub fn with_incremented(&self, id: &str) -> Cart {
        self.map_line(id, |line| line.quantity = line.quantity.saturating_add(1))
    }

    /// Quantity never drops below 1; decrement never removes a line.
    pub fn with_decremented(&self, id: &str) -> Cart {
        self.map_line(id, |line| {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
        })
    }

    fn map_line<F>(&self, id: &str, update: F) -> Cart
    where
        F: Fn(&mut CartLine),
    {
        let lines = self
            .0
            .iter()
            .cloned()
            .map(|mut line| {
                if line.id == id {
                    update(&mut line);
                }
                line
            })
            .collect();
        Cart(lines)
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Cart(lines)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
