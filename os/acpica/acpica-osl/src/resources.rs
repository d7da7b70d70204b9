//! Device resources (`_CRS`).

use acpica_sys::{
    ACPI_BUFFER, ACPI_HANDLE, ACPI_RESOURCE_HEADER_SIZE, ACPI_RESOURCE_TYPE_END_TAG, AcpiGetCurrentResources,
};
use core::ptr::NonNull;

use crate::error::{AcpicaError, check};
use crate::osl::AcpiOsFree;

/// A resource list ACPICA allocated with `AcpiOsAllocate`; freed on drop.
pub struct ResourceBuffer {
    pointer: NonNull<u8>,
    length: usize,
}

impl ResourceBuffer {
    /// The raw `ACPI_RESOURCE` records.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        // SAFETY: ACPICA filled `length` bytes at `pointer`.
        unsafe { core::slice::from_raw_parts(self.pointer.as_ptr(), self.length) }
    }

    #[must_use]
    pub fn iter(&self) -> Resources<'_> {
        Resources::new(self.as_bytes())
    }
}

impl<'a> IntoIterator for &'a ResourceBuffer {
    type Item = Resource<'a>;
    type IntoIter = Resources<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Drop for ResourceBuffer {
    fn drop(&mut self) {
        // SAFETY: the buffer came from AcpiOsAllocate and is freed once.
        unsafe { AcpiOsFree(self.pointer.as_ptr().cast()) };
    }
}

/// The current resource settings of `device`.
///
/// # Errors
/// [`AcpicaError::Status`] if `_CRS` cannot be evaluated.
pub fn current(device: ACPI_HANDLE) -> Result<Option<ResourceBuffer>, AcpicaError> {
    let mut buffer = ACPI_BUFFER::allocate();
    // SAFETY: `buffer` asks ACPICA to allocate the result.
    check("AcpiGetCurrentResources", unsafe {
        AcpiGetCurrentResources(device, &raw mut buffer)
    })?;

    let Some(pointer) = NonNull::new(buffer.Pointer.cast::<u8>()) else {
        return Ok(None);
    };
    let length = usize::try_from(buffer.Length).unwrap_or(0);
    Ok(Some(ResourceBuffer { pointer, length }))
}

/// One resource record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resource<'a> {
    /// `ACPI_RESOURCE_TYPE_*`.
    pub kind: u32,
    /// The record body following the header.
    pub data: &'a [u8],
}

/// Iterates the records of a resource list by their length field.
///
/// Stops at the end tag, at a record shorter than its header, and at a record
/// reaching past the end of the list.
#[derive(Debug, Clone)]
pub struct Resources<'a> {
    rest: &'a [u8],
}

impl<'a> Resources<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { rest: bytes }
    }
}

impl<'a> Iterator for Resources<'a> {
    type Item = Resource<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, length) = read_header(self.rest)?;
        let length = usize::try_from(length).ok()?;
        if kind == ACPI_RESOURCE_TYPE_END_TAG || length < ACPI_RESOURCE_HEADER_SIZE || length > self.rest.len() {
            self.rest = &[];
            return None;
        }

        let (record, rest) = self.rest.split_at(length);
        self.rest = rest;
        Some(Resource {
            kind,
            data: &record[ACPI_RESOURCE_HEADER_SIZE..],
        })
    }
}

fn read_header(bytes: &[u8]) -> Option<(u32, u32)> {
    let kind = bytes.get(0..4)?.try_into().ok()?;
    let length = bytes.get(4..8)?.try_into().ok()?;
    Some((u32::from_ne_bytes(kind), u32::from_ne_bytes(length)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use acpica_sys::{ACPI_RESOURCE_TYPE_IO, ACPI_RESOURCE_TYPE_IRQ};

    fn record(kind: u32, length: u32, body: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&kind.to_ne_bytes());
        bytes.extend_from_slice(&length.to_ne_bytes());
        bytes.extend_from_slice(body);
        bytes
    }

    #[test]
    fn walks_records_until_the_end_tag() {
        let mut list = record(ACPI_RESOURCE_TYPE_IRQ, 12, &[9, 0, 0, 0]);
        list.extend(record(ACPI_RESOURCE_TYPE_IO, 16, &[1, 2, 3, 4, 5, 6, 7, 8]));
        list.extend(record(ACPI_RESOURCE_TYPE_END_TAG, 8, &[]));
        list.extend(record(ACPI_RESOURCE_TYPE_IRQ, 8, &[]));

        let resources: Vec<_> = Resources::new(&list).collect();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].kind, ACPI_RESOURCE_TYPE_IRQ);
        assert_eq!(resources[0].data, [9, 0, 0, 0]);
        assert_eq!(resources[1].kind, ACPI_RESOURCE_TYPE_IO);
        assert_eq!(resources[1].data.len(), 8);
    }

    #[test]
    fn stops_at_a_zero_length() {
        let mut list = record(ACPI_RESOURCE_TYPE_IRQ, 0, &[]);
        list.extend(record(ACPI_RESOURCE_TYPE_IO, 8, &[]));
        assert_eq!(Resources::new(&list).count(), 0);
    }

    #[test]
    fn stops_at_a_record_past_the_end() {
        let mut list = record(ACPI_RESOURCE_TYPE_IO, 8, &[]);
        list.extend(record(ACPI_RESOURCE_TYPE_IRQ, 64, &[1, 2]));
        let mut resources = Resources::new(&list);
        assert_eq!(resources.next().map(|r| r.kind), Some(ACPI_RESOURCE_TYPE_IO));
        assert_eq!(resources.next(), None);
        assert_eq!(resources.next(), None);
    }

    #[test]
    fn truncated_header_ends_the_list() {
        assert_eq!(Resources::new(&[1, 0, 0]).count(), 0);
    }
}
