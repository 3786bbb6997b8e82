/// Operation classes that race independently of each other.
///
/// A newer request only supersedes older requests of the same class, so a
/// pending list refresh never discards a search result. Superseding a
/// `Mutate` request only moves selection and panel ownership to the newer
/// one; the older mutation still lands in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestClass {
    List,
    Search,
    Mutate,
}

/// Token attached to an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub class: RequestClass,
    pub generation: u64,
}

/// Latest issued generation per request class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketLedger {
    list: u64,
    search: u64,
    mutate: u64,
}

impl TicketLedger {
    pub fn issue(&mut self, class: RequestClass) -> Ticket {
        let slot = self.slot_mut(class);
        *slot += 1;
        Ticket {
            class,
            generation: *slot,
        }
    }

    pub fn latest(&self, class: RequestClass) -> u64 {
        match class {
            RequestClass::List => self.list,
            RequestClass::Search => self.search,
            RequestClass::Mutate => self.mutate,
        }
    }

    /// True if no newer request of the same class has been issued since.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation != 0 && self.latest(ticket.class) == ticket.generation
    }

    fn slot_mut(&mut self, class: RequestClass) -> &mut u64 {
        match class {
            RequestClass::List => &mut self.list,
            RequestClass::Search => &mut self.search,
            RequestClass::Mutate => &mut self.mutate,
        }
    }
}
