//! The item registry and its change-notification fan-out.
//!
//! The [`Registry`] is the single owning store of all items. Items are
//! created only through [`Registry::add`] and change status only through
//! [`Registry::transfer`]; every mutation synchronously notifies all
//! subscribed listeners with the post-mutation item sequence.
//!
//! The registry is shared by handle (`Rc<Registry>`) and threaded explicitly
//! to every listing and input form at construction time. There is no global
//! instance.
//!
//! # Invariants
//!
//! 1. Item ids are unique for the process lifetime.
//! 2. Insertion order is preserved; a transfer never reorders the sequence.
//! 3. Listeners are notified in registration order.
//! 4. A failed transfer leaves the sequence untouched and produces no
//!    notification.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{RegistryError, Result};
use crate::item::{Item, ItemId, Status};

/// A subscriber callback, invoked with the full item sequence after every
/// mutation.
pub type Listener = Rc<dyn Fn(&[Item])>;

/// The single owning store of all items.
///
/// Mutations run to completion, including the notification pass, before the
/// mutating call returns. The fan-out is synchronous and single-threaded; a
/// listener that calls back into [`add`](Registry::add) or
/// [`transfer`](Registry::transfer) while a notification is in flight gets
/// [`RegistryError::ReentrantMutation`] instead of a torn borrow.
///
/// # Examples
///
/// ```
/// use trellis_protocol::{Registry, Status};
///
/// let registry = Registry::new();
/// let id = registry.add("Build API", "Design the REST API", 3).unwrap();
///
/// registry.transfer(id, Status::Finished).unwrap();
/// assert_eq!(registry.get(id).unwrap().status, Status::Finished);
/// ```
#[derive(Default)]
pub struct Registry {
    items: RefCell<Vec<Item>>,
    listeners: RefCell<Vec<Listener>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("items", &self.items)
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl Registry {
    /// Creates a new empty registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Registry;
    ///
    /// let registry = Registry::new();
    /// assert!(registry.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new registry behind a shared handle.
    ///
    /// Convenience for the common construction pattern where the handle is
    /// passed to listings and the input form.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Registry;
    ///
    /// let registry = Registry::shared();
    /// let for_listing = registry.clone();
    /// ```
    #[must_use]
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Creates a new item and appends it to the owned sequence.
    ///
    /// The item gets a fresh unique id and starts as [`Status::Active`].
    /// Every subscriber is notified with the post-mutation sequence before
    /// this call returns. Inputs are assumed already validated by the form
    /// collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ReentrantMutation`] when called from inside
    /// an active notification pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Registry;
    ///
    /// let registry = Registry::new();
    /// let id = registry.add("Write docs", "Document the public API", 2).unwrap();
    /// assert_eq!(registry.get(id).unwrap().title, "Write docs");
    /// ```
    pub fn add(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<ItemId> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|_| RegistryError::ReentrantMutation)?;
        let item = Item::new(title, description, people);
        let id = item.id;
        items.push(item);
        drop(items);

        tracing::debug!(%id, "item added");
        self.notify();
        Ok(id)
    }

    /// Transitions the item with the given id to a new status.
    ///
    /// Transferring an item to the status it already has is a legal no-op
    /// in effect; it still triggers a full notification pass.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no item has the given id; the
    /// sequence is left untouched and no notification fires. Returns
    /// [`RegistryError::ReentrantMutation`] when called from inside an
    /// active notification pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::{ItemId, Registry, RegistryError, Status};
    ///
    /// let registry = Registry::new();
    /// let missing = ItemId::new_v4();
    /// assert!(matches!(
    ///     registry.transfer(missing, Status::Finished),
    ///     Err(RegistryError::NotFound(_))
    /// ));
    /// ```
    pub fn transfer(&self, id: ItemId, status: Status) -> Result<()> {
        let mut items = self
            .items
            .try_borrow_mut()
            .map_err(|_| RegistryError::ReentrantMutation)?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            tracing::warn!(%id, "transfer target not found");
            return Err(RegistryError::NotFound(id));
        };
        item.status = status;
        drop(items);

        tracing::debug!(%id, status = status.display_name(), "item transferred");
        self.notify();
        Ok(())
    }

    /// Registers a listener invoked on every future `add` or `transfer`.
    ///
    /// Listeners are invoked in registration order. There is no unsubscribe
    /// in normal operation; a listing that wants to stop observing captures
    /// a weak handle and lets its upgrade fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use trellis_protocol::Registry;
    ///
    /// let registry = Registry::new();
    /// let seen = Rc::new(Cell::new(0));
    /// let counter = seen.clone();
    /// registry.subscribe(move |items| counter.set(items.len()));
    ///
    /// registry.add("A", "B", 1).unwrap();
    /// assert_eq!(seen.get(), 1);
    /// ```
    pub fn subscribe(&self, listener: impl Fn(&[Item]) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Returns a copy of the item with the given id, if present.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.items.borrow().iter().find(|item| item.id == id).cloned()
    }

    /// Returns a copy of the full item sequence in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Registry;
    ///
    /// let registry = Registry::new();
    /// registry.add("A", "first", 1).unwrap();
    /// registry.add("B", "second", 2).unwrap();
    ///
    /// let titles: Vec<_> = registry.snapshot().into_iter().map(|i| i.title).collect();
    /// assert_eq!(titles, ["A", "B"]);
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    /// Returns the number of items in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if the registry holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Invokes every listener with the current item sequence.
    ///
    /// The listener list is cloned before iterating so a subscription made
    /// from inside a callback takes effect on the next mutation instead of
    /// invalidating this pass. The shared borrow on `items` held across the
    /// pass is what turns a re-entrant mutation into a typed error.
    fn notify(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        let items = self.items.borrow();
        for listener in &listeners {
            (**listener)(items.as_slice());
        }
    }
}
