//! Run-time shape dispatch through serde.
//!
//! [`IpShape`](crate::IpShape) rejects unsupported shapes when the program is
//! compiled. This module offers the same four rendering paths for any value
//! implementing `Serialize`, choosing the path from the serde data model when
//! the value is rendered:
//!
//! | serde data model | Path |
//! |------------------|------|
//! | integers (`i8` to `u128`) | byte groups, most significant first |
//! | `seq`, `bytes` of integers | elements in order |
//! | `str`, `char` | verbatim |
//! | `tuple`, `tuple_struct` of scalars | slots in declared order |
//!
//! Fixed-size arrays are serialized by serde as tuples, so at run time they
//! take the tuple path and accept any scalar element (`["a", "b"]` renders
//! `a.b`), while `Vec` and slices keep the integer-only sequence rule. An
//! array of integers renders the same on either path.
//!
//! `newtype_struct` and `Some` are transparent. Everything else fails with
//! [`Error::UnsupportedType`]. The rendering is finished in memory before
//! anything is handed back, so a rejected value never produces partial output.
//!
//! ## Usage
//!
//! ```rust
//! use ip_printer::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Address(u8, u8, u8, u8);
//!
//! assert_eq!(to_string(&Address(10, 0, 0, 1)).unwrap(), "10.0.0.1");
//! assert_eq!(to_string(&2130706433i32).unwrap(), "127.0.0.1");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use ip_printer::Serializer;
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new();
//! vec![1, 2, 3].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "1.2.3");
//! ```

use crate::dotted;
use crate::octets::{octets, Integral};
use crate::{Error, Result, Shape};
use serde::ser::{self, Impossible, Serialize};
use tracing::{debug, trace};

/// The dotted serializer.
///
/// Holds the rendering of exactly one top-level value. Serializing a second
/// value into the same serializer fails instead of appending to the first.
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
    shape: Option<Shape>,
}

impl Serializer {
    /// Creates an empty serializer.
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(64),
            shape: None,
        }
    }

    /// Path taken by the value serialized so far, if any.
    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }

    /// Consumes the serializer and returns the rendering.
    pub fn into_inner(self) -> String {
        self.output
    }

    fn begin(&mut self, shape: Shape) -> Result<()> {
        if let Some(taken) = self.shape {
            return Err(Error::custom(format!(
                "serializer already holds a value ({})",
                taken
            )));
        }
        trace!(%shape, "rendering");
        self.shape = Some(shape);
        Ok(())
    }

    fn write_integer<T: Integral>(&mut self, v: T) -> Result<()> {
        self.begin(Shape::Integer)?;
        dotted::join_into(&mut self.output, octets(v));
        Ok(())
    }
}

fn unsupported(what: &str) -> Error {
    debug!(what, "rejecting value with unsupported shape");
    Error::unsupported_type(what)
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = TupleSerializer<'a>;
    type SerializeTupleStruct = TupleSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Impossible<(), Error>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(unsupported("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        self.write_integer(v)
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        Err(unsupported("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(unsupported("f64"))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.begin(Shape::Text)?;
        self.output.push(v);
        Ok(())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.begin(Shape::Text)?;
        self.output.push_str(v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        self.begin(Shape::Sequence)?;
        dotted::join_into(&mut self.output, v);
        Ok(())
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Err(unsupported("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Err(unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        Err(unsupported(&format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(unsupported(&format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        Err(unsupported(&format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.begin(Shape::Sequence)?;
        Ok(SeqSerializer {
            ser: self,
            elements: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        // Arrays arrive here too; only `[T; 0]` produces an empty tuple
        self.begin(if len == 0 { Shape::Sequence } else { Shape::Tuple })?;
        Ok(TupleSerializer {
            ser: self,
            elements: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_tuple(len)
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(unsupported(&format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(unsupported("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(unsupported(&format!("struct {}", name)))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(unsupported(&format!("enum variant {}::{}", name, variant)))
    }
}

pub struct SeqSerializer<'a> {
    ser: &'a mut Serializer,
    elements: Vec<String>,
}

impl<'a> ser::SerializeSeq for SeqSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match value.serialize(ComponentSerializer)? {
            Component::Integer(text) => {
                self.elements.push(text);
                Ok(())
            }
            Component::Scalar(_) => Err(unsupported("sequence element that is not an integer")),
        }
    }

    fn end(self) -> Result<Self::Ok> {
        dotted::join_into(&mut self.ser.output, &self.elements);
        Ok(())
    }
}

pub struct TupleSerializer<'a> {
    ser: &'a mut Serializer,
    elements: Vec<String>,
}

impl<'a> TupleSerializer<'a> {
    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let component = value.serialize(ComponentSerializer)?;
        self.elements.push(component.into_text());
        Ok(())
    }

    fn finish(self) -> Result<()> {
        dotted::join_into(&mut self.ser.output, &self.elements);
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for TupleSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleStruct for TupleSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

/// A rendered sequence element or tuple slot.
#[derive(Debug, Clone, PartialEq)]
enum Component {
    /// Decimal rendering of an integer, allowed anywhere.
    Integer(String),
    /// Default rendering of any other scalar, allowed only in tuple slots.
    Scalar(String),
}

impl Component {
    fn into_text(self) -> String {
        match self {
            Component::Integer(text) | Component::Scalar(text) => text,
        }
    }
}

/// Renders one nested scalar with its default textual form.
struct ComponentSerializer;

impl ser::Serializer for ComponentSerializer {
    type Ok = Component;
    type Error = Error;

    type SerializeSeq = Impossible<Component, Error>;
    type SerializeTuple = Impossible<Component, Error>;
    type SerializeTupleStruct = Impossible<Component, Error>;
    type SerializeTupleVariant = Impossible<Component, Error>;
    type SerializeMap = Impossible<Component, Error>;
    type SerializeStruct = Impossible<Component, Error>;
    type SerializeStructVariant = Impossible<Component, Error>;

    fn serialize_bool(self, v: bool) -> Result<Component> {
        Ok(Component::Scalar(v.to_string()))
    }

    fn serialize_i8(self, v: i8) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_i16(self, v: i16) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_i32(self, v: i32) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_i64(self, v: i64) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_i128(self, v: i128) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_u8(self, v: u8) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_u16(self, v: u16) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_u32(self, v: u32) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_u64(self, v: u64) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_u128(self, v: u128) -> Result<Component> {
        Ok(Component::Integer(v.to_string()))
    }

    fn serialize_f32(self, v: f32) -> Result<Component> {
        Ok(Component::Scalar(v.to_string()))
    }

    fn serialize_f64(self, v: f64) -> Result<Component> {
        Ok(Component::Scalar(v.to_string()))
    }

    fn serialize_char(self, v: char) -> Result<Component> {
        Ok(Component::Scalar(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Component> {
        Ok(Component::Scalar(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Component> {
        Err(unsupported("nested bytes"))
    }

    fn serialize_none(self) -> Result<Component> {
        Err(unsupported("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Component>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Component> {
        Err(unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Component> {
        Err(unsupported(&format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Component> {
        Err(unsupported(&format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Component>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Component>
    where
        T: ?Sized + Serialize,
    {
        Err(unsupported(&format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(unsupported("nested sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(unsupported("nested tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(unsupported(&format!("nested tuple struct {}", name)))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(unsupported(&format!("enum variant {}::{}", name, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(unsupported("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(unsupported(&format!("struct {}", name)))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(unsupported(&format!("enum variant {}::{}", name, variant)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::{BTreeMap, LinkedList};

    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut serializer = Serializer::new();
        value.serialize(&mut serializer)?;
        Ok(serializer.into_inner())
    }

    #[derive(Serialize)]
    struct Wrapped(i32);

    #[derive(Serialize)]
    struct Quad(u8, u8, u8, u8);

    #[derive(Serialize)]
    struct Named {
        a: u8,
    }

    #[derive(Serialize)]
    enum Kind {
        Plain,
        Tagged(u8),
    }

    #[test]
    fn test_integers() {
        assert_eq!(render(&-1i8).unwrap(), "255");
        assert_eq!(render(&0i16).unwrap(), "0.0");
        assert_eq!(render(&2130706433i32).unwrap(), "127.0.0.1");
        assert_eq!(
            render(&8875824491850138409i64).unwrap(),
            "123.45.67.89.101.112.131.41"
        );
        assert_eq!(render(&1u128).unwrap(), "0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.1");
    }

    #[test]
    fn test_sequences() {
        assert_eq!(render(&vec![1, 2, 3]).unwrap(), "1.2.3");
        assert_eq!(render(&Vec::<i32>::new()).unwrap(), "");
        let list: LinkedList<i16> = [-1, 300].into_iter().collect();
        assert_eq!(render(&list).unwrap(), "-1.300");
        assert_eq!(render(&[10u8, 0, 0, 1]).unwrap(), "10.0.0.1");
    }

    #[test]
    fn test_text() {
        assert_eq!(render("a.b.c").unwrap(), "a.b.c");
        assert_eq!(render(&'x').unwrap(), "x");
    }

    #[test]
    fn test_tuples() {
        assert_eq!(render(&(1, "a", 3.5)).unwrap(), "1.a.3.5");
        assert_eq!(render(&Quad(192, 168, 0, 1)).unwrap(), "192.168.0.1");
        assert_eq!(render(&(true, 'c', Some(2))).unwrap(), "true.c.2");
    }

    #[test]
    fn test_transparent_wrappers() {
        assert_eq!(render(&Wrapped(2130706433)).unwrap(), "127.0.0.1");
        assert_eq!(render(&Some(0i16)).unwrap(), "0.0");
    }

    #[test]
    fn test_rejections() {
        let map: BTreeMap<&str, u8> = BTreeMap::new();
        assert_eq!(render(&map), Err(Error::unsupported_type("map")));
        assert_eq!(
            render(&Named { a: 1 }),
            Err(Error::unsupported_type("struct Named"))
        );
        assert_eq!(render(&()), Err(Error::unsupported_type("unit")));
        assert_eq!(render(&None::<u8>), Err(Error::unsupported_type("none")));
        assert_eq!(render(&1.5f64), Err(Error::unsupported_type("f64")));
        assert_eq!(render(&true), Err(Error::unsupported_type("bool")));
        assert_eq!(
            render(&Kind::Plain),
            Err(Error::unsupported_type("enum variant Kind::Plain"))
        );
        assert_eq!(
            render(&Kind::Tagged(1)),
            Err(Error::unsupported_type("enum variant Kind::Tagged"))
        );
    }

    #[test]
    fn test_sequence_elements_must_be_integers() {
        assert_eq!(
            render(&vec!["a", "b"]),
            Err(Error::unsupported_type(
                "sequence element that is not an integer"
            ))
        );
        assert_eq!(
            render(&vec![vec![1]]),
            Err(Error::unsupported_type("nested sequence"))
        );
    }

    #[test]
    fn test_arrays_take_the_tuple_path() {
        assert_eq!(render(&[1.5f64, 2.5]).unwrap(), "1.5.2.5");
        assert_eq!(render(&["a", "b"]).unwrap(), "a.b");
        assert_eq!(render(&[1.5f64, 2.5]), render(&(1.5f64, 2.5)));
        assert_eq!(render(&[-1i8, 2]).unwrap(), "-1.2");

        assert!(render(&vec!["a", "b"]).is_err());
        assert!(render(&["a", "b"][..]).is_err());
    }

    #[test]
    fn test_shape_is_recorded() {
        let mut serializer = Serializer::new();
        assert_eq!(serializer.shape(), None);
        (1, "a").serialize(&mut serializer).unwrap();
        assert_eq!(serializer.shape(), Some(Shape::Tuple));

        let mut serializer = Serializer::new();
        <[u8; 0]>::default().serialize(&mut serializer).unwrap();
        assert_eq!(serializer.shape(), Some(Shape::Sequence));

        let mut serializer = Serializer::new();
        Wrapped(7).serialize(&mut serializer).unwrap();
        assert_eq!(serializer.shape(), Some(Shape::Integer));
    }

    #[test]
    fn test_second_value_is_rejected() {
        let mut serializer = Serializer::new();
        1u8.serialize(&mut serializer).unwrap();

        let result = 2u8.serialize(&mut serializer);
        assert_eq!(
            result,
            Err(Error::custom("serializer already holds a value (integer)"))
        );
        assert_eq!(serializer.into_inner(), "1");
    }

    #[test]
    fn test_tuple_slots_must_be_scalars() {
        assert_eq!(
            render(&(1, vec![2, 3])),
            Err(Error::unsupported_type("nested sequence"))
        );
        assert_eq!(
            render(&(1, (2, 3))),
            Err(Error::unsupported_type("nested tuple"))
        );
    }
}
