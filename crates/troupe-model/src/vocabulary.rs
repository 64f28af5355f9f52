// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Well-known identifiers of the organization model vocabulary.
//!
//! The engines only need a handful of classes and relations by name; the rest
//! of the taxonomy is opaque and reached through `ModelQuery`.

use crate::model::ResourceModel;

/// Namespace all vocabulary terms live in.
pub const NAMESPACE: &str = "http://www.rock-robotics.org/2014/01/om-schema#";

/// Resolves `term` inside `NAMESPACE`.
///
/// ```rust
/// # use troupe_model::vocabulary;
/// assert_eq!(
///     vocabulary::resolve("has").as_str(),
///     "http://www.rock-robotics.org/2014/01/om-schema#has"
/// );
/// ```
#[inline]
pub fn resolve(term: &str) -> ResourceModel {
    ResourceModel::new(format!("{NAMESPACE}{term}"))
}

/// Relation linking a model to the resources it owns.
#[inline]
pub fn has() -> ResourceModel {
    resolve("has")
}

/// Symmetric compatibility relation between interface types.
#[inline]
pub fn compatible_with() -> ResourceModel {
    resolve("compatibleWith")
}

/// Base class of all requestable functionalities.
#[inline]
pub fn functionality() -> ResourceModel {
    resolve("Functionality")
}

/// Base class of agent models.
#[inline]
pub fn actor() -> ResourceModel {
    resolve("Actor")
}

/// Default base class of connectable interfaces.
#[inline]
pub fn electro_mechanical_interface() -> ResourceModel {
    resolve("ElectroMechanicalInterface")
}

/// Relation used as a fallback capacity when a property has no data value.
#[inline]
pub fn has_transport_capacity() -> ResourceModel {
    resolve("hasTransportCapacity")
}

/// Data property: mass of one atom in kg.
#[inline]
pub fn mass() -> ResourceModel {
    resolve("mass")
}

/// Data property: nominal travel velocity in m/s.
#[inline]
pub fn nominal_velocity() -> ResourceModel {
    resolve("nominalVelocity")
}

/// Data property: maximum travel velocity in m/s.
#[inline]
pub fn max_velocity() -> ResourceModel {
    resolve("maxVelocity")
}

/// Data property: supply voltage in V.
#[inline]
pub fn supply_voltage() -> ResourceModel {
    resolve("supplyVoltage")
}

/// Data property: power source capacity in Ah.
#[inline]
pub fn power_source_capacity() -> ResourceModel {
    resolve("powerSourceCapacity")
}

/// Data property: nominal power consumption in W.
#[inline]
pub fn nominal_power_consumption() -> ResourceModel {
    resolve("nominalPowerConsumption")
}
