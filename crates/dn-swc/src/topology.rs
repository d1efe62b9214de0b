use std::collections::HashMap;

use dn_core::{Error, Result};

use crate::record::TreeRecord;

/// Parent-linked tree rebuilt from an SWC record sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwcTopology {
    root: usize,
    order: Vec<usize>,
    parents: HashMap<usize, Option<usize>>,
    children: HashMap<usize, Vec<usize>>,
}

impl SwcTopology {
    /// Checks that the records form a tree readable front to back: ids are
    /// unique, exactly one record has no parent, and every parent appears
    /// before the records that name it.
    pub fn from_records(records: &[TreeRecord]) -> Result<Self> {
        let mut root = None;
        let mut order = Vec::with_capacity(records.len());
        let mut parents = HashMap::with_capacity(records.len());
        let mut children: HashMap<usize, Vec<usize>> = HashMap::with_capacity(records.len());

        for r in records {
            if parents.contains_key(&r.id) {
                return Err(invalid(r.id, "duplicate id"));
            }
            match r.parent {
                None => {
                    if let Some(first) = root {
                        return Err(invalid(r.id, &format!("second root after {first}")));
                    }
                    root = Some(r.id);
                }
                Some(p) => {
                    if !parents.contains_key(&p) {
                        return Err(invalid(r.id, &format!("parent {p} not emitted earlier")));
                    }
                    children.entry(p).or_default().push(r.id);
                }
            }
            parents.insert(r.id, r.parent);
            order.push(r.id);
        }

        let root = root.ok_or_else(|| invalid(0, "no root record"))?;
        Ok(Self {
            root,
            order,
            parents,
            children,
        })
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.parents.contains_key(&id)
    }

    pub fn parent(&self, id: usize) -> Option<usize> {
        self.parents.get(&id).copied().flatten()
    }

    /// Children of `id` in record order.
    pub fn children(&self, id: usize) -> &[usize] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(id, parent)` pairs in record order.
    pub fn parent_links(&self) -> Vec<(usize, Option<usize>)> {
        self.order.iter().map(|&id| (id, self.parents[&id])).collect()
    }

    /// Pre-order walk from the root, children in record order.
    pub fn depth_first_order(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.order.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut depth_of: HashMap<usize, usize> = HashMap::with_capacity(self.order.len());
        let mut max = 0;
        for &id in &self.order {
            let d = self.parent(id).map_or(1, |p| depth_of[&p] + 1);
            depth_of.insert(id, d);
            max = max.max(d);
        }
        max
    }
}

fn invalid(id: usize, reason: &str) -> Error {
    Error::InvalidTree {
        id,
        reason: reason.to_string(),
    }
}
