use bumpalo::Bump;
use rand::Rng;

use crate::aabb::Aabb;
use crate::fast_rand;
use crate::interaction::Interaction;
use crate::shapes::Primitive;
use crate::{Float, Ray};

/// Bounding volume hierarchy over the scene's primitive array.
///
/// The tree is built once, before rendering, and holds indices into the
/// primitive slice it was built from rather than the primitives themselves;
/// the same slice must be passed back to `intersect`. Construction picks a
/// uniformly random split axis per node and partitions at the median of the
/// primitives' AABB minima (select-k, not a full sort). Slices of one or two
/// primitives become leaves.
pub struct Bvh {
    pub bounds: Aabb,
    nodes: Vec<LinearNode>,
    order: Vec<usize>,
}

impl Bvh {
    pub fn build(prims: &[Primitive]) -> Self {
        if prims.is_empty() {
            return Self { bounds: Aabb::empty(), nodes: Vec::new(), order: Vec::new() };
        }

        let mut prim_info: Vec<PrimInfo> = prims
            .iter()
            .enumerate()
            .map(|(i, p)| PrimInfo {
                prim_id: i,
                bounds: p.bounding_box()
                    .expect("bvh requires bounded primitives"),
            })
            .collect();

        let arena = Bump::new();
        let mut order = Vec::with_capacity(prims.len());
        let root = Self::recursive_build(&arena, &mut prim_info, &mut order);
        let bounds = root.bounds();

        let mut nodes = Vec::with_capacity(2 * prims.len());
        Self::flatten_tree(&mut nodes, root);

        tracing::debug!(
            prims = prims.len(),
            nodes = nodes.len(),
            "built bvh"
        );

        Self { bounds, nodes, order }
    }

    fn recursive_build<'a>(
        arena: &'a Bump,
        prim_info: &mut [PrimInfo],
        order: &mut Vec<usize>,
    ) -> &'a BuildNode<'a> {
        let node_bounds = prim_info
            .iter()
            .fold(Aabb::empty(), |b, prim| b.join(&prim.bounds));

        if prim_info.len() <= 2 {
            let first = order.len() as u32;
            for prim in prim_info.iter() {
                order.push(prim.prim_id);
            }
            return arena.alloc(BuildNode::Leaf {
                bounds: node_bounds,
                first,
                count: prim_info.len() as u16,
            });
        }

        let axis = fast_rand::with_rng(|rng| rng.gen_range(0, 3usize));
        let mid = prim_info.len() / 2;
        prim_info.select_nth_unstable_by(mid, |a, b| {
            a.bounds.min[axis]
                .partial_cmp(&b.bounds.min[axis])
                .expect("non-finite bounds in bvh build")
        });
        let (front, back) = prim_info.split_at_mut(mid);

        let left = Self::recursive_build(arena, front, order);
        let right = Self::recursive_build(arena, back, order);
        arena.alloc(BuildNode::Interior {
            bounds: left.bounds().join(&right.bounds()),
            children: [left, right],
        })
    }

    // Returns the flattened subtree length.
    fn flatten_tree(nodes: &mut Vec<LinearNode>, node: &BuildNode) -> usize {
        match *node {
            BuildNode::Leaf { bounds, first, count } => {
                nodes.push(LinearNode {
                    bounds,
                    kind: LinearNodeKind::Leaf { first, count },
                });
                1
            }
            BuildNode::Interior { bounds, children } => {
                nodes.push(LinearNode {
                    bounds,
                    kind: LinearNodeKind::Interior { second_child: 0 },
                });
                let my_idx = nodes.len() - 1;
                let first_len = Self::flatten_tree(nodes, children[0]);
                let second_idx = my_idx + first_len + 1;
                if let LinearNodeKind::Interior { ref mut second_child } = nodes[my_idx].kind {
                    *second_child = second_idx as u32;
                } else {
                    unreachable!()
                }
                let second_len = Self::flatten_tree(nodes, children[1]);
                first_len + second_len + 1
            }
        }
    }

    pub fn intersect(
        &self,
        prims: &[Primitive],
        ray: &Ray,
        t_min: Float,
        t_max: Float,
    ) -> Option<Interaction> {
        if self.nodes.is_empty() {
            return None;
        }
        self.hit_node(0, prims, ray, t_min, t_max)
    }

    fn hit_node(
        &self,
        node_idx: usize,
        prims: &[Primitive],
        ray: &Ray,
        t_min: Float,
        t_max: Float,
    ) -> Option<Interaction> {
        let node = &self.nodes[node_idx];
        if !node.bounds.hit(ray, t_min, t_max) {
            return None;
        }

        match node.kind {
            LinearNodeKind::Leaf { first, count } => {
                let mut closest_so_far = t_max;
                let mut hit = None;
                for i in first..first + count as u32 {
                    let prim_idx = self.order[i as usize];
                    if let Some(mut isect) =
                        prims[prim_idx].intersect(ray, t_min, closest_so_far)
                    {
                        closest_so_far = isect.t;
                        isect.prim = prim_idx;
                        hit = Some(isect);
                    }
                }
                hit
            }
            LinearNodeKind::Interior { second_child } => {
                // query both children; the right query is clipped to the
                // left hit so the nearer interaction wins
                let left = self.hit_node(node_idx + 1, prims, ray, t_min, t_max);
                let right_t_max = left.as_ref().map_or(t_max, |isect| isect.t);
                let right =
                    self.hit_node(second_child as usize, prims, ray, t_min, right_t_max);
                right.or(left)
            }
        }
    }

    #[cfg(test)]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct LinearNode {
    bounds: Aabb,
    kind: LinearNodeKind,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum LinearNodeKind {
    Leaf { first: u32, count: u16 },
    Interior { second_child: u32 },
}

struct PrimInfo {
    prim_id: usize,
    bounds: Aabb,
}

enum BuildNode<'a> {
    Leaf {
        bounds: Aabb,
        first: u32,
        count: u16,
    },
    Interior {
        bounds: Aabb,
        children: [&'a BuildNode<'a>; 2],
    },
}

impl<'a> BuildNode<'a> {
    fn bounds(&self) -> Aabb {
        match self {
            BuildNode::Leaf { bounds, .. } => *bounds,
            BuildNode::Interior { bounds, .. } => *bounds,
        }
    }
}
