//! Relation holders shared by all models

/// Anything with a persistence identity
pub trait Identified {
    /// `None` until the model has been persisted
    fn id(&self) -> Option<i32>;
}

/// To-one relation.
///
/// `Empty` is a reference that only knows the id of the related model.
/// It is resolved into `Loaded` by an options strategy, never implicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Ref<M> {
    Unset,
    Empty(i32),
    Loaded(Box<M>),
}

impl<M> Default for Ref<M> {
    fn default() -> Self {
        Ref::Unset
    }
}

impl<M> Ref<M> {
    /// Reference holding only an id
    pub fn empty(id: i32) -> Self {
        Ref::Empty(id)
    }

    /// Reference built from a nullable foreign key
    pub fn from_id(id: Option<i32>) -> Self {
        id.map_or(Ref::Unset, Ref::Empty)
    }

    /// Reference to an already loaded model
    pub fn loaded(model: M) -> Self {
        Ref::Loaded(Box::new(model))
    }

    pub fn get(&self) -> Option<&M> {
        match self {
            Ref::Loaded(model) => Some(model),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut M> {
        match self {
            Ref::Loaded(model) => Some(model),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Ref::Loaded(_))
    }
}

impl<M: Identified> Ref<M> {
    /// Id of the referenced model, whether loaded or not
    pub fn id(&self) -> Option<i32> {
        match self {
            Ref::Unset => None,
            Ref::Empty(id) => Some(*id),
            Ref::Loaded(model) => model.id(),
        }
    }

    /// Point the reference at `id`, keeping a loaded model that already matches
    pub fn refer_to(&mut self, id: Option<i32>) {
        if self.id() != id {
            *self = Ref::from_id(id);
        }
    }
}

/// Reverse relation (children, or the single dependent of a one-to-one).
#[derive(Debug, Clone, PartialEq)]
pub enum Lazy<T> {
    Unloaded,
    Loaded(T),
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Lazy::Unloaded
    }
}

impl<T> Lazy<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Lazy::Loaded(value) => Some(value),
            Lazy::Unloaded => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Lazy::Loaded(value) => Some(value),
            Lazy::Unloaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Lazy::Loaded(_))
    }
}

impl<M> Lazy<Vec<M>> {
    /// Loaded children, or an empty slice when nothing was loaded
    pub fn as_slice(&self) -> &[M] {
        self.get().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Thing {
        id: Option<i32>,
    }

    impl Identified for Thing {
        fn id(&self) -> Option<i32> {
            self.id
        }
    }

    #[test]
    fn test_ref_id_is_known_before_loading() {
        let empty: Ref<Thing> = Ref::empty(7);
        assert_eq!(empty.id(), Some(7));
        assert!(!empty.is_loaded());
        assert!(empty.get().is_none());

        let loaded = Ref::loaded(Thing { id: Some(7) });
        assert_eq!(loaded.id(), Some(7));
        assert!(loaded.is_loaded());
    }

    #[test]
    fn test_ref_from_nullable_key() {
        assert_eq!(Ref::<Thing>::from_id(None), Ref::Unset);
        assert_eq!(Ref::<Thing>::from_id(Some(3)), Ref::Empty(3));
        assert_eq!(Ref::<Thing>::Unset.id(), None);
    }

    #[test]
    fn test_refer_to_keeps_matching_loaded_model() {
        let mut reference = Ref::loaded(Thing { id: Some(2) });
        reference.refer_to(Some(2));
        assert!(reference.is_loaded());

        reference.refer_to(Some(5));
        assert_eq!(reference, Ref::Empty(5));
    }

    #[test]
    fn test_lazy_slice_of_unloaded_is_empty() {
        let lazy: Lazy<Vec<Thing>> = Lazy::default();
        assert!(lazy.as_slice().is_empty());
        assert!(!lazy.is_loaded());

        let loaded = Lazy::Loaded(vec![Thing { id: Some(1) }]);
        assert_eq!(loaded.as_slice().len(), 1);
    }
}
