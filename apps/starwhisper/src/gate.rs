/// Proof that a request was admitted by a [`RequestGate`].
#[derive(Debug, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// Admits at most one in-flight request per form and tells stale completions
/// apart from current ones.
#[derive(Debug, Default)]
pub struct RequestGate {
    generation: u64,
    in_flight: bool,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` while another request is still in flight.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.in_flight {
            return None;
        }
        self.generation += 1;
        self.in_flight = true;
        Some(RequestTicket {
            generation: self.generation,
        })
    }

    /// Whether the result for `ticket` should be applied.
    pub fn finish(&mut self, ticket: RequestTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        let current = self.in_flight;
        self.in_flight = false;
        current
    }

    /// Abandon whatever is in flight. Its ticket will be refused by `finish`.
    pub fn cancel(&mut self) {
        if self.in_flight {
            self.generation += 1;
            self.in_flight = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_while_in_flight() {
        let mut gate = RequestGate::new();
        let ticket = gate.begin().unwrap();
        assert!(gate.begin().is_none());
        assert!(gate.finish(ticket));
        assert!(gate.begin().is_some());
    }

    #[test]
    fn cancelled_ticket_is_stale() {
        let mut gate = RequestGate::new();
        let stale = gate.begin().unwrap();
        gate.cancel();

        let fresh = gate.begin().unwrap();
        assert!(!gate.finish(stale));
        // the stale completion must not free the gate
        assert!(gate.begin().is_none());
        assert!(gate.finish(fresh));
    }

    #[test]
    fn cancel_when_idle_is_harmless() {
        let mut gate = RequestGate::new();
        gate.cancel();
        let ticket = gate.begin().unwrap();
        assert!(gate.finish(ticket));
    }
}
