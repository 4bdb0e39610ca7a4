//! # Register Pool
//!
//! Fixed table of machine register descriptors with capability and
//! availability tracking. The code generator asks for "a free register
//! matching these capabilities"; the pool scans in ascending id order and
//! hands back the first exact match.
//!
//! The target machine has 16 registers and no register pressure spilling,
//! so a flat scan is the whole policy:
//! - R0-R10: general purpose, capabilities {general, integer, float}
//! - R11-R13 (CR, SR, DR): string/control scratch, reserved
//! - R14-R15 (BP, SP): stack bookkeeping, reserved
//!
//! Reserved registers are born `Unavailable` and never leave that state
//! through allocation traffic.

use std::fmt;

use crate::error::{Error, Result};

/// Number of registers in the machine model
pub const NUM_REGISTERS: usize = 16;

/// Capability flag set describing what a register may legally hold
///
/// Capabilities and allocation state are deliberately two separate typed
/// fields; the flags never encode whether a register is busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capability(u8);

impl Capability {
    /// No capabilities
    pub const NONE: Capability = Capability(0);
    /// General-purpose value
    pub const GENERAL: Capability = Capability(1);
    /// Integer value
    pub const INTEGER: Capability = Capability(1 << 1);
    /// Floating-point value
    pub const FLOAT: Capability = Capability(1 << 2);
    /// String/control scratch (reserved registers only)
    pub const STRING: Capability = Capability(1 << 3);
    /// Stack bookkeeping (reserved registers only)
    pub const STACK: Capability = Capability(1 << 4);

    /// The three flags `acquire` compares exactly
    pub const ALLOC_MASK: Capability =
        Capability(Self::GENERAL.0 | Self::INTEGER.0 | Self::FLOAT.0);

    /// Capability set of a general-purpose register
    pub const GENERAL_PURPOSE: Capability = Self::ALLOC_MASK;

    /// True if every flag in `other` is set in `self`
    pub fn contains(self, other: Capability) -> bool {
        self.0 & other.0 == other.0
    }

    /// Restrict to the flags also present in `mask`
    pub fn masked(self, mask: Capability) -> Capability {
        Capability(self.0 & mask.0)
    }

    /// True if no flag is set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Capability {
    type Output = Capability;

    fn bitor(self, rhs: Capability) -> Capability {
        Capability(self.0 | rhs.0)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Capability, &str); 5] = [
            (Capability::GENERAL, "general"),
            (Capability::INTEGER, "integer"),
            (Capability::FLOAT, "float"),
            (Capability::STRING, "string"),
            (Capability::STACK, "stack"),
        ];

        if self.is_empty() {
            return write!(f, "none");
        }

        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Allocation state of a single register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterState {
    /// Free for allocation
    Available,
    /// Handed out by `acquire`, not yet released
    Allocated,
    /// Reserved register, never a general allocation target
    Unavailable,
}

impl fmt::Display for RegisterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterState::Available => write!(f, "available"),
            RegisterState::Allocated => write!(f, "allocated"),
            RegisterState::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Stable index of a register in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterId(pub u8);

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// One machine register descriptor
///
/// `id`, `name`, `alias` and `capabilities` are fixed at pool creation;
/// only `state` changes afterwards, and only through the pool.
#[derive(Debug, Clone)]
pub struct Register {
    id: RegisterId,
    name: String,
    alias: Option<String>,
    capabilities: Capability,
    state: RegisterState,
}

impl Register {
    /// Stable pool index
    pub fn id(&self) -> RegisterId {
        self.id
    }

    /// Display name ("R0".."R15")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semantic alias, present only on the reserved subset (CR, SR, DR, BP, SP)
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Capability flag set
    pub fn capabilities(&self) -> Capability {
        self.capabilities
    }

    /// Current allocation state
    pub fn state(&self) -> RegisterState {
        self.state
    }

    /// True for the reserved control/stack registers
    pub fn is_reserved(&self) -> bool {
        self.state == RegisterState::Unavailable
            || self.capabilities.contains(Capability::STRING)
            || self.capabilities.contains(Capability::STACK)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} ({})", self.name, alias),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Static pool layout: (name, alias, capabilities)
///
/// R11-R13 carry the control and string-scratch aliases, R14-R15 the stack
/// pair. Reserved entries get exactly one capability flag.
const LAYOUT: [(&str, Option<&str>, Capability); NUM_REGISTERS] = [
    ("R0", None, Capability::GENERAL_PURPOSE),
    ("R1", None, Capability::GENERAL_PURPOSE),
    ("R2", None, Capability::GENERAL_PURPOSE),
    ("R3", None, Capability::GENERAL_PURPOSE),
    ("R4", None, Capability::GENERAL_PURPOSE),
    ("R5", None, Capability::GENERAL_PURPOSE),
    ("R6", None, Capability::GENERAL_PURPOSE),
    ("R7", None, Capability::GENERAL_PURPOSE),
    ("R8", None, Capability::GENERAL_PURPOSE),
    ("R9", None, Capability::GENERAL_PURPOSE),
    ("R10", None, Capability::GENERAL_PURPOSE),
    ("R11", Some("CR"), Capability::STRING),
    ("R12", Some("SR"), Capability::STRING),
    ("R13", Some("DR"), Capability::STRING),
    ("R14", Some("BP"), Capability::STACK),
    ("R15", Some("SP"), Capability::STACK),
];

/// Fixed-capacity pool of machine registers
///
/// Created once per compilation, owned by the [`CodegenContext`] and passed
/// by reference into the code generator. Individual registers cycle between
/// `Available` and `Allocated`; `Unavailable` is sticky.
///
/// [`CodegenContext`]: crate::backend::CodegenContext
#[derive(Debug, Clone)]
pub struct RegisterPool {
    registers: Vec<Register>,
    /// Most registers simultaneously allocated since creation or reset
    high_water: usize,
}

impl RegisterPool {
    /// Create the pool with the static 16-register layout
    ///
    /// Backing storage comes from the global allocator; if that fails the
    /// process aborts, which is the one unrecoverable condition here.
    pub fn new() -> Self {
        let registers = LAYOUT
            .iter()
            .enumerate()
            .map(|(index, (name, alias, capabilities))| {
                let state = if capabilities.masked(Capability::ALLOC_MASK).is_empty() {
                    RegisterState::Unavailable
                } else {
                    RegisterState::Available
                };
                Register {
                    id: RegisterId(index as u8),
                    name: (*name).to_string(),
                    alias: alias.map(str::to_string),
                    capabilities: *capabilities,
                    state,
                }
            })
            .collect();

        RegisterPool {
            registers,
            high_water: 0,
        }
    }

    /// Acquire the lowest-id free register matching `requested` exactly
    ///
    /// Match semantics: over the canonical {general, integer, float} flags,
    /// the register's bits must equal the request's bits. This is an exact
    /// match, not a subset test - a request for {general} alone will not
    /// take a register that also carries {integer, float}. Reserved string
    /// and stack registers are `Unavailable` and never considered.
    ///
    /// The selected register is moved to `Allocated` in the same step; no
    /// partially applied state is observable afterwards.
    pub fn acquire(&mut self, requested: Capability) -> Result<RegisterId> {
        let wanted = requested.masked(Capability::ALLOC_MASK);

        let selected = self.registers.iter().position(|register| {
            register.state == RegisterState::Available
                && register.capabilities.masked(Capability::ALLOC_MASK) == wanted
        });

        match selected {
            Some(index) => {
                self.registers[index].state = RegisterState::Allocated;
                let name = self.registers[index].name.clone();
                tracing::trace!(register = %name, %requested, "acquired register");

                let allocated = self
                    .registers
                    .iter()
                    .filter(|r| r.state == RegisterState::Allocated)
                    .count();
                self.high_water = self.high_water.max(allocated);
                Ok(self.registers[index].id)
            }
            None => {
                tracing::debug!(%requested, "register pool exhausted for request");
                Err(Error::RegisterUnavailable { requested })
            }
        }
    }

    /// Release a register back to `Available`
    ///
    /// Releasing a reserved (`Unavailable`) register is a no-op, not an
    /// error; releasing an already-`Available` register leaves it available.
    pub fn release(&mut self, id: RegisterId) {
        match self.registers.get_mut(id.0 as usize) {
            Some(register) => {
                if register.state != RegisterState::Unavailable {
                    register.state = RegisterState::Available;
                    tracing::trace!(register = %register.name, "released register");
                }
            }
            None => {
                tracing::warn!(id = id.0, "release of unknown register id ignored");
            }
        }
    }

    /// Return every non-reserved register to `Available`
    ///
    /// Used between independent compilation units or after a hard error to
    /// recover a clean pool. Also resets the high-water mark.
    pub fn reset_all(&mut self) {
        for register in &mut self.registers {
            if register.state != RegisterState::Unavailable {
                register.state = RegisterState::Available;
            }
        }
        self.high_water = 0;
        tracing::debug!("register pool reset");
    }

    /// Look up a register descriptor by id
    pub fn register(&self, id: RegisterId) -> Option<&Register> {
        self.registers.get(id.0 as usize)
    }

    /// Iterate over all register descriptors in id order
    pub fn iter(&self) -> impl Iterator<Item = &Register> {
        self.registers.iter()
    }

    /// Number of registers currently `Available`
    pub fn available_count(&self) -> usize {
        self.count_state(RegisterState::Available)
    }

    /// Number of registers currently `Allocated`
    pub fn allocated_count(&self) -> usize {
        self.count_state(RegisterState::Allocated)
    }

    /// Number of reserved (`Unavailable`) registers
    pub fn reserved_count(&self) -> usize {
        self.count_state(RegisterState::Unavailable)
    }

    /// Most registers simultaneously allocated since creation or reset
    pub fn allocated_high_water(&self) -> usize {
        self.high_water
    }

    /// Total pool capacity
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// True if the pool holds no registers (never the case after `new`)
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    fn count_state(&self, state: RegisterState) -> usize {
        self.registers.iter().filter(|r| r.state == state).count()
    }
}

impl Default for RegisterPool {
    fn default() -> Self {
        Self::new()
    }
}
