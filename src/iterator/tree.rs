// File-system composite with depth-first traversal

use std::fmt;

/// A file or a folder of further components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    File { name: String },
    Folder { name: String, children: Vec<Component> },
}

impl Component {
    pub fn file(name: impl Into<String>) -> Self {
        Component::File { name: name.into() }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Component::Folder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Component::File { name } | Component::Folder { name, .. } => name.as_str(),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Component::Folder { .. })
    }

    pub fn children(&self) -> &[Component] {
        match self {
            Component::File { .. } => &[],
            Component::Folder { children, .. } => children.as_slice(),
        }
    }

    /// Add a child; files cannot hold children and hand the component back
    pub fn add(&mut self, child: Component) -> Result<(), Component> {
        match self {
            Component::Folder { children, .. } => {
                children.push(child);
                Ok(())
            }
            Component::File { .. } => Err(child),
        }
    }

    /// Folder holding `children` in order, for assembling trees inline
    pub fn folder_with(
        name: impl Into<String>,
        children: impl IntoIterator<Item = Component>,
    ) -> Self {
        Component::Folder {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Remove the first direct child with this name
    pub fn remove(&mut self, name: &str) -> Option<Component> {
        match self {
            Component::Folder { children, .. } => {
                let pos = children.iter().position(|c| c.name() == name)?;
                Some(children.remove(pos))
            }
            Component::File { .. } => None,
        }
    }

    /// Indented listing, four spaces per level
    pub fn display_lines(&self) -> Vec<String> {
        self.iter_with_depth()
            .map(|(depth, component)| {
                let kind = if component.is_folder() { "Folder" } else { "File" };
                format!("{}{}: {}", " ".repeat(depth * 4), kind, component.name())
            })
            .collect()
    }

    /// Pre-order traversal: a folder comes before its children
    pub fn iter(&self) -> ComponentIter<'_> {
        ComponentIter {
            stack: vec![(0, self)],
        }
    }

    /// Pre-order traversal paired with each component's depth
    pub fn iter_with_depth(&self) -> impl Iterator<Item = (usize, &Component)> {
        self.iter().with_depth()
    }

    pub fn file_count(&self) -> usize {
        self.iter().filter(|c| !c.is_folder()).count()
    }

    pub fn find(&self, name: &str) -> Option<&Component> {
        self.iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.display_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Depth-first iterator over a component tree
///
/// Uses an explicit stack, so deep trees do not recurse.
pub struct ComponentIter<'a> {
    stack: Vec<(usize, &'a Component)>,
}

impl<'a> ComponentIter<'a> {
    /// Yield `(depth, component)` pairs instead of bare components
    pub fn with_depth(mut self) -> impl Iterator<Item = (usize, &'a Component)> {
        std::iter::from_fn(move || self.advance())
    }

    fn advance(&mut self) -> Option<(usize, &'a Component)> {
        let (depth, component) = self.stack.pop()?;
        // Reverse so the first child is popped first
        for child in component.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, component))
    }
}

impl<'a> Iterator for ComponentIter<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|(_, component)| component)
    }
}

impl<'a> IntoIterator for &'a Component {
    type Item = &'a Component;
    type IntoIter = ComponentIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
