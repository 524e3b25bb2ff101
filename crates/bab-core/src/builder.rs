use crate::types::{Part, PartType, PartsCatalog, Robot};

/// A robot position, filled from one part list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Head,
    LeftArm,
    Torso,
    RightArm,
    Base,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::Head,
        Slot::LeftArm,
        Slot::Torso,
        Slot::RightArm,
        Slot::Base,
    ];

    pub fn part_type(&self) -> PartType {
        match self {
            Slot::Head => PartType::Heads,
            Slot::LeftArm | Slot::RightArm => PartType::Arms,
            Slot::Torso => PartType::Torsos,
            Slot::Base => PartType::Bases,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Head => "Head",
            Slot::LeftArm => "Left arm",
            Slot::Torso => "Torso",
            Slot::RightArm => "Right arm",
            Slot::Base => "Base",
        }
    }

    /// CSS position class used by the builder layout.
    pub fn css_class(&self) -> &'static str {
        match self {
            Slot::Head => "top",
            Slot::LeftArm => "left",
            Slot::Torso => "center",
            Slot::RightArm => "right",
            Slot::Base => "bottom",
        }
    }

    fn index(&self) -> usize {
        match self {
            Slot::Head => 0,
            Slot::LeftArm => 1,
            Slot::Torso => 2,
            Slot::RightArm => 3,
            Slot::Base => 4,
        }
    }
}

fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

fn previous_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index % len + len - 1) % len
    }
}

/// The builder's current pick for each slot, as indices into the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RobotSelection {
    indices: [usize; 5],
}

impl RobotSelection {
    pub fn index(&self, slot: Slot) -> usize {
        self.indices[slot.index()]
    }

    /// Build a selection from explicit indices in slot order
    /// (head, left arm, torso, right arm, base).
    pub fn from_indices(indices: [usize; 5]) -> Self {
        Self { indices }
    }

    pub fn select_next(&mut self, slot: Slot, catalog: &PartsCatalog) {
        let len = catalog.by_type(slot.part_type()).len();
        let i = &mut self.indices[slot.index()];
        *i = next_index(*i, len);
    }

    pub fn select_previous(&mut self, slot: Slot, catalog: &PartsCatalog) {
        let len = catalog.by_type(slot.part_type()).len();
        let i = &mut self.indices[slot.index()];
        *i = previous_index(*i, len);
    }

    /// The part currently shown for `slot`, if its list has one at that index.
    pub fn part<'a>(&self, slot: Slot, catalog: &'a PartsCatalog) -> Option<&'a Part> {
        catalog.by_type(slot.part_type()).get(self.index(slot))
    }

    /// Assemble the selected robot. `None` while any slot has nothing to show.
    pub fn assemble(&self, catalog: &PartsCatalog) -> Option<Robot> {
        Some(Robot::new(
            self.part(Slot::Head, catalog)?.clone(),
            self.part(Slot::LeftArm, catalog)?.clone(),
            self.part(Slot::Torso, catalog)?.clone(),
            self.part(Slot::RightArm, catalog)?.clone(),
            self.part(Slot::Base, catalog)?.clone(),
        ))
    }

    /// The preview gets a sale border when the selected head is on sale.
    pub fn head_on_sale(&self, catalog: &PartsCatalog) -> bool {
        self.part(Slot::Head, catalog).is_some_and(|p| p.on_sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(part_type: PartType, n: i64) -> Vec<Part> {
        (0..n)
            .map(|id| Part {
                id,
                part_type,
                title: format!("{part_type} {id}"),
                description: String::new(),
                src: String::new(),
                cost: 1.0 + id as f64,
                on_sale: id == 1,
            })
            .collect()
    }

    fn catalog() -> PartsCatalog {
        PartsCatalog {
            heads: parts(PartType::Heads, 3),
            arms: parts(PartType::Arms, 2),
            torsos: parts(PartType::Torsos, 1),
            bases: parts(PartType::Bases, 4),
        }
    }

    #[test]
    fn next_wraps_to_start() {
        let c = catalog();
        let mut sel = RobotSelection::default();
        for _ in 0..3 {
            sel.select_next(Slot::Head, &c);
        }
        assert_eq!(sel.index(Slot::Head), 0);
    }

    #[test]
    fn previous_wraps_to_end() {
        let c = catalog();
        let mut sel = RobotSelection::default();
        sel.select_previous(Slot::Base, &c);
        assert_eq!(sel.index(Slot::Base), 3);
        sel.select_previous(Slot::Base, &c);
        assert_eq!(sel.index(Slot::Base), 2);
    }

    #[test]
    fn arms_are_selected_independently() {
        let c = catalog();
        let mut sel = RobotSelection::default();
        sel.select_next(Slot::LeftArm, &c);
        assert_eq!(sel.index(Slot::LeftArm), 1);
        assert_eq!(sel.index(Slot::RightArm), 0);
    }

    #[test]
    fn empty_list_keeps_index_at_zero() {
        let c = PartsCatalog::default();
        let mut sel = RobotSelection::default();
        sel.select_next(Slot::Torso, &c);
        sel.select_previous(Slot::Torso, &c);
        assert_eq!(sel.index(Slot::Torso), 0);
        assert!(sel.assemble(&c).is_none());
    }

    #[test]
    fn assemble_uses_selected_parts() {
        let c = catalog();
        let sel = RobotSelection::from_indices([2, 1, 0, 0, 3]);
        let robot = sel.assemble(&c).expect("robot");
        assert_eq!(robot.head.id, 2);
        assert_eq!(robot.left_arm.id, 1);
        assert_eq!(robot.right_arm.id, 0);
        assert_eq!(robot.base.id, 3);
        assert!((robot.cost - (3.0 + 2.0 + 1.0 + 1.0 + 4.0)).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_index_does_not_assemble() {
        let c = catalog();
        let sel = RobotSelection::from_indices([0, 0, 5, 0, 0]);
        assert!(sel.assemble(&c).is_none());
    }

    #[test]
    fn head_sale_flag_follows_selection() {
        let c = catalog();
        let mut sel = RobotSelection::default();
        assert!(!sel.head_on_sale(&c));
        sel.select_next(Slot::Head, &c);
        assert!(sel.head_on_sale(&c));
    }

    #[test]
    fn previous_index_handles_stale_index() {
        assert_eq!(previous_index(7, 3), 0);
        assert_eq!(next_index(7, 3), 2);
    }
}
