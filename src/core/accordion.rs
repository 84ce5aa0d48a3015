// Single-open accordion for the product list.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionItem {
    pub id: String,
    pub open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccordionAction {
    Toggle(String),
    CloseAll,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    items: Vec<AccordionItem>,
}

impl Accordion {
    /// Items in display order, with `default_open` expanded if present.
    pub fn new<I, S>(ids: I, default_open: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = ids
            .into_iter()
            .map(|id| {
                let id = id.into();
                let open = default_open == Some(id.as_str());
                AccordionItem { id, open }
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    pub fn open_item(&self) -> Option<&str> {
        self.items.iter().find(|i| i.open).map(|i| i.id.as_str())
    }

    /// Apply `action`; returns the id that became open, if any. Toggling the
    /// open item closes it, toggling another opens it and closes the rest.
    pub fn reduce(&mut self, action: AccordionAction) -> Option<&str> {
        match action {
            AccordionAction::CloseAll => {
                for i in &mut self.items {
                    i.open = false;
                }
                None
            }
            AccordionAction::Toggle(id) => {
                let pos = self.items.iter().position(|i| i.id == id)?;
                let opening = !self.items[pos].open;
                for (k, i) in self.items.iter_mut().enumerate() {
                    i.open = opening && k == pos;
                }
                opening.then(|| self.items[pos].id.as_str())
            }
        }
    }
}

/// Product number encoded in an item id such as `item-3`.
pub fn product_number(item_id: &str) -> Option<u32> {
    item_id.rsplit('-').next()?.parse().ok()
}
