use std::cmp::Ordering;

const FIRST_ELEMENT_INDEX: usize = 1;

/// Binary min-heap over ids `0..max` that knows where each id sits, so the
/// priority of a queued id can be changed in place.
pub(crate) struct PriorityQueue<P> {
    heap: Vec<(usize, P)>,
    positions: Vec<Option<usize>>,
    size: usize,
    max: usize,
}

impl<P> PriorityQueue<P>
where
    P: PartialOrd + Copy + Default,
{
    pub fn new(max: usize) -> Self {
        let mut heap = Vec::with_capacity(max + 1);
        // Index 0 is a sentinel so children of `i` sit at `2i` and `2i + 1`
        heap.push((max + 1, P::default()));
        Self {
            heap,
            positions: vec![None; max],
            size: 0,
            max,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn contains(&self, id: usize) -> bool {
        self.positions[id].is_some()
    }

    /// Queues `id`, or moves it to `priority` when it is already queued.
    pub fn push(&mut self, id: usize, priority: P) {
        if id >= self.max {
            panic!("ID {} out of bounds, max: {}", id, self.max)
        }

        if self.contains(id) {
            self.update_priority(id, priority);
            return;
        }

        self.size += 1;
        self.heap.push((id, priority));
        self.positions[id] = Some(self.size);
        self.sift_up(self.size);
    }

    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.size == 0 {
            return None;
        }

        let (id, priority) = self.heap.swap_remove(FIRST_ELEMENT_INDEX);
        self.size -= 1;
        self.positions[id] = None;

        if self.size > 0 {
            // The last element was swapped into the root
            self.positions[self.heap[FIRST_ELEMENT_INDEX].0] = Some(FIRST_ELEMENT_INDEX);
            self.sift_down(FIRST_ELEMENT_INDEX);
        }

        Some((id, priority))
    }

    pub fn update_priority(&mut self, id: usize, priority: P) {
        if let Some(position) = self.positions[id] {
            let current_priority = self.heap[position].1;
            self.heap[position] = (id, priority);

            match priority.partial_cmp(&current_priority) {
                Some(Ordering::Greater) => self.sift_down(position),
                Some(Ordering::Less) => self.sift_up(position),
                _ => {}
            }
        }
    }

    fn sift_up(&mut self, element_index: usize) {
        let mut index = element_index;
        let priority = self.heap[index].1;
        while index > FIRST_ELEMENT_INDEX && priority < self.heap[index >> 1].1 {
            let parent_index = index >> 1;
            self.heap.swap(index, parent_index);
            self.positions[self.heap[index].0] = Some(index);

            index = parent_index;
        }

        self.positions[self.heap[index].0] = Some(index);
    }

    fn sift_down(&mut self, element_index: usize) {
        let mut index = element_index;
        let priority = self.heap[index].1;

        while index << 1 <= self.size {
            let left_child_index = index << 1;
            let right_child_index = left_child_index + 1;

            let mut child_index = left_child_index;
            if right_child_index <= self.size
                && self.heap[right_child_index].1 < self.heap[left_child_index].1
            {
                child_index = right_child_index;
            }

            if priority <= self.heap[child_index].1 {
                break;
            }

            self.heap.swap(index, child_index);
            self.positions[self.heap[index].0] = Some(index);

            index = child_index;
        }

        self.positions[self.heap[index].0] = Some(index);
    }
}
