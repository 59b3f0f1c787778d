use crate::core::{Deserialize, MapKey, Serialize};
use crate::internal::sys::*;
use crate::internal::{ContainerKind, Error, Result, Value};
use crate::stack::Stack;

// ------------------------------- Helpers -------------------------------- //

/// Removes an object member by key, preserving the order of the rest.
fn take_member(members: &mut Vec<(String, Value)>, key: &str) -> Option<Value> {
    let index = members.iter().position(|(name, _)| name == key)?;

    Some(members.remove(index).1)
}

/// Rebuilds the elements of a wire array for a container of the given
/// kind. The returned buffer is ready for the kind's construction step;
/// stack staging is reversed so the rebuilt container drains in wire
/// order. Public so downstream container types can declare a kind and
/// reuse the reconstruction rules.
pub fn stage_sequence<T: Deserialize>(value: Value, kind: ContainerKind) -> Result<Vec<T>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::shape(format!(
                "Expected array for {}, found {}",
                kind.label(),
                other.kind_name()
            )))
        }
    };

    let mut staged = Vec::with_capacity(items.len());

    for item in items {
        staged.push(T::deserialize(item)?);
    }

    if kind.reverses_staging() {
        staged.reverse();
    }

    Ok(staged)
}

/// Emits a wire array in the container's natural iteration order.
pub fn serialize_sequence<'a, T, I>(items: I) -> Result<Value>
where
    T: Serialize + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut values = Vec::with_capacity(items.size_hint().0);

    for item in items {
        values.push(item.serialize()?);
    }

    Ok(Value::Array(values))
}

fn pow10(exponent: i32) -> f64 {
    let mut result = 1.0f64;

    for _ in 0..exponent.unsigned_abs() {
        result *= 10.0;
    }

    if exponent < 0 {
        return 1.0 / result;
    }

    result
}

/// Reconstructs `mantissa × 10^exponent` from an exponent form the direct
/// decimal parse rejected.
fn parse_scientific(token: &str) -> Result<f64> {
    let parts: Vec<&str> = token.split(|c| c == 'e' || c == 'E').collect();

    if parts.len() != 2 {
        return Err(Error::format(format!("Invalid number format: `{}`", token)));
    }

    let mantissa: f64 = parts[0]
        .parse()
        .map_err(|_| Error::format(format!("Invalid mantissa in `{}`", token)))?;
    let exponent: i32 = parts[1]
        .trim_start_matches('+')
        .parse()
        .map_err(|_| Error::format(format!("Invalid exponent in `{}`", token)))?;

    Ok(mantissa * pow10(exponent))
}

fn parse_f64_token(token: &str) -> Result<f64> {
    match token {
        "NaN" => Ok(f64::NAN),
        "Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        _ => match token.parse::<f64>() {
            Ok(number) => Ok(number),
            Err(_) => parse_scientific(token),
        },
    }
}

fn parse_f32_token(token: &str) -> Result<f32> {
    match token {
        "NaN" => Ok(f32::NAN),
        "Infinity" => Ok(f32::INFINITY),
        "-Infinity" => Ok(f32::NEG_INFINITY),
        _ => match token.parse::<f32>() {
            Ok(number) => Ok(number),
            Err(_) => parse_scientific(token).map(|number| number as f32),
        },
    }
}

macro_rules! impl_for_integer {
    ($type:ty) => {
        impl Serialize for $type {
            fn serialize(&self) -> Result<Value> {
                Ok(Value::Number(self.to_string()))
            }
        }

        impl Deserialize for $type {
            fn deserialize(value: Value) -> Result<Self> {
                match value {
                    Value::Number(token) | Value::Text(token) => {
                        token.parse::<$type>().map_err(|_| {
                            Error::format(format!(
                                "Cannot parse `{}` as `{}`",
                                token,
                                stringify!($type)
                            ))
                        })
                    }
                    other => Err(Error::shape(format!(
                        "Expected `{}` number, found {}",
                        stringify!($type),
                        other.kind_name()
                    ))),
                }
            }
        }
    };
}

macro_rules! impl_for_map_key {
    ($type:ty) => {
        impl MapKey for $type {
            fn to_text(&self) -> String {
                self.to_string()
            }

            fn from_text(text: &str) -> Result<Self> {
                text.parse::<$type>().map_err(|_| {
                    Error::format(format!(
                        "Cannot parse `{}` as `{}` map key",
                        text,
                        stringify!($type)
                    ))
                })
            }
        }
    };
}

macro_rules! impl_for_tuple {
    ($(($member:ident, $key:literal)),+) => {
        impl<$($member: Serialize),+> Serialize for ($($member,)+) {
            fn serialize(&self) -> Result<Value> {
                #[allow(non_snake_case)]
                let ($($member,)+) = self;

                let mut members = Vec::new();

                $(members.push(($key.to_string(), $member.serialize()?));)+

                Ok(Value::Object(members))
            }
        }

        impl<$($member: Deserialize),+> Deserialize for ($($member,)+) {
            fn deserialize(value: Value) -> Result<Self> {
                match value {
                    Value::Object(mut members) => {
                        const EXPECTED_LEN: usize = 0 $(+ { let _ = stringify!($member); 1 })+;

                        if members.len() != EXPECTED_LEN {
                            return Err(Error::unsupported(format!(
                                "Expected tuple object with {} members, got {}",
                                EXPECTED_LEN,
                                members.len()
                            )));
                        }

                        Ok(($(
                            {
                                let member = take_member(&mut members, $key).ok_or_else(|| {
                                    Error::unsupported(format!("Missing tuple member `{}`", $key))
                                })?;

                                $member::deserialize(member)?
                            },
                        )+))
                    }
                    other => Err(Error::shape(format!(
                        "Expected object for tuple, found {}",
                        other.kind_name()
                    ))),
                }
            }
        }
    };
}

// ------------------------------- Boolean -------------------------------- //

impl Serialize for bool {
    fn serialize(&self) -> Result<Value> {
        Ok(Value::Boolean(*self))
    }
}

impl Deserialize for bool {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(boolean) => Ok(boolean),
            Value::Text(token) => token
                .parse::<bool>()
                .map_err(|_| Error::format(format!("Cannot parse `{}` as `bool`", token))),
            other => Err(Error::shape(format!(
                "Expected `bool`, found {}",
                other.kind_name()
            ))),
        }
    }
}

// ------------------------------- Integer -------------------------------- //

impl_for_integer!(u8);
impl_for_integer!(i8);
impl_for_integer!(u16);
impl_for_integer!(i16);
impl_for_integer!(u32);
impl_for_integer!(i32);
impl_for_integer!(u64);
impl_for_integer!(i64);
impl_for_integer!(u128);
impl_for_integer!(i128);
impl_for_integer!(usize);
impl_for_integer!(isize);

// -------------------------------- Float --------------------------------- //

// JSON has no literal for the three special values, so they travel as
// quoted sentinel strings; finite values print the shortest text that
// parses back to the same value.

impl Serialize for f32 {
    fn serialize(&self) -> Result<Value> {
        if self.is_nan() {
            return Ok(Value::Text("NaN".to_string()));
        }

        if self.is_infinite() {
            if self.is_sign_positive() {
                return Ok(Value::Text("Infinity".to_string()));
            }

            return Ok(Value::Text("-Infinity".to_string()));
        }

        Ok(Value::Number(self.to_string()))
    }
}

impl Serialize for f64 {
    fn serialize(&self) -> Result<Value> {
        if self.is_nan() {
            return Ok(Value::Text("NaN".to_string()));
        }

        if self.is_infinite() {
            if self.is_sign_positive() {
                return Ok(Value::Text("Infinity".to_string()));
            }

            return Ok(Value::Text("-Infinity".to_string()));
        }

        Ok(Value::Number(self.to_string()))
    }
}

impl Deserialize for f32 {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Number(token) | Value::Text(token) => parse_f32_token(&token),
            other => Err(Error::shape(format!(
                "Expected `f32` number, found {}",
                other.kind_name()
            ))),
        }
    }
}

impl Deserialize for f64 {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Number(token) | Value::Text(token) => parse_f64_token(&token),
            other => Err(Error::shape(format!(
                "Expected `f64` number, found {}",
                other.kind_name()
            ))),
        }
    }
}

// -------------------------------- char ---------------------------------- //

impl Serialize for char {
    fn serialize(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl Deserialize for char {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Text(text) => {
                let mut chars = text.chars();

                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    (None, _) => Err(Error::format(
                        "Expected single character, got an empty string",
                    )),
                    _ => Err(Error::format(format!(
                        "Expected single character, got `{}`",
                        text
                    ))),
                }
            }
            other => Err(Error::shape(format!(
                "Expected `char`, found {}",
                other.kind_name()
            ))),
        }
    }
}

// -------------------------------- &str ---------------------------------- //

impl Serialize for &str {
    fn serialize(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

// ------------------------------- String --------------------------------- //

impl Serialize for String {
    fn serialize(&self) -> Result<Value> {
        Ok(Value::Text(self.clone()))
    }
}

impl Deserialize for String {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Text(text) => Ok(text),
            other => Err(Error::shape(format!(
                "Expected `string`, found {}",
                other.kind_name()
            ))),
        }
    }
}

// ------------------------------ Map keys -------------------------------- //

impl_for_map_key!(u8);
impl_for_map_key!(i8);
impl_for_map_key!(u16);
impl_for_map_key!(i16);
impl_for_map_key!(u32);
impl_for_map_key!(i32);
impl_for_map_key!(u64);
impl_for_map_key!(i64);
impl_for_map_key!(u128);
impl_for_map_key!(i128);
impl_for_map_key!(usize);
impl_for_map_key!(isize);
impl_for_map_key!(bool);
impl_for_map_key!(char);

impl MapKey for String {
    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

// -------------------------- Fixed-size Array ---------------------------- //

impl<T: Serialize, const N: usize> Serialize for [T; N] {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

impl<T: Deserialize, const N: usize> Deserialize for [T; N] {
    fn deserialize(value: Value) -> Result<Self> {
        let staged = stage_sequence::<T>(value, ContainerKind::FixedArray)?;

        if staged.len() != N {
            return Err(Error::shape(format!(
                "Expected array of {} elements, got {}",
                N,
                staged.len()
            )));
        }

        staged
            .try_into()
            .map_err(|_| Error::shape(format!("Cannot rebuild array of {} elements", N)))
    }
}

// -------------------------------- Slice --------------------------------- //

impl<T: Serialize> Serialize for &[T] {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

// --------------------------------- Vec ---------------------------------- //

impl<T: Serialize> Serialize for Vec<T> {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

impl<T: Deserialize> Deserialize for Vec<T> {
    fn deserialize(value: Value) -> Result<Self> {
        stage_sequence(value, ContainerKind::MutableList)
    }
}

// ------------------------------ Boxed slice ----------------------------- //

// Built once from the finished staging buffer, never mutated after.

impl<T: Serialize> Serialize for Box<[T]> {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

impl<T: Deserialize> Deserialize for Box<[T]> {
    fn deserialize(value: Value) -> Result<Self> {
        let staged = stage_sequence::<T>(value, ContainerKind::ImmutableView)?;

        Ok(staged.into_boxed_slice())
    }
}

// ------------------------------- VecDeque ------------------------------- //

impl<T: Serialize> Serialize for VecDeque<T> {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

impl<T: Deserialize> Deserialize for VecDeque<T> {
    fn deserialize(value: Value) -> Result<Self> {
        let staged = stage_sequence::<T>(value, ContainerKind::FifoQueue)?;

        Ok(staged.into_iter().collect())
    }
}

// ------------------------------ LinkedList ------------------------------ //

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

impl<T: Deserialize> Deserialize for LinkedList<T> {
    fn deserialize(value: Value) -> Result<Self> {
        let staged = stage_sequence::<T>(value, ContainerKind::LinkedSequence)?;

        Ok(staged.into_iter().collect())
    }
}

// ------------------------------- BTreeSet ------------------------------- //

impl<T: Serialize> Serialize for BTreeSet<T> {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

impl<T: Deserialize + Ord> Deserialize for BTreeSet<T> {
    fn deserialize(value: Value) -> Result<Self> {
        let staged = stage_sequence::<T>(value, ContainerKind::UniqueSet)?;

        Ok(staged.into_iter().collect())
    }
}

// ------------------------------- HashSet -------------------------------- //

#[cfg(feature = "std")]
impl<T: Serialize> Serialize for std::collections::HashSet<T> {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

#[cfg(feature = "std")]
impl<T: Deserialize + core::hash::Hash + Eq> Deserialize for std::collections::HashSet<T> {
    fn deserialize(value: Value) -> Result<Self> {
        let staged = stage_sequence::<T>(value, ContainerKind::UniqueSet)?;

        Ok(staged.into_iter().collect())
    }
}

// -------------------------------- Stack --------------------------------- //

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize(&self) -> Result<Value> {
        serialize_sequence(self.iter())
    }
}

impl<T: Deserialize> Deserialize for Stack<T> {
    fn deserialize(value: Value) -> Result<Self> {
        let staged = stage_sequence::<T>(value, ContainerKind::LifoStack)?;

        Ok(Stack::from(staged))
    }
}

// -------------------------------- Tuple --------------------------------- //

impl Serialize for () {
    fn serialize(&self) -> Result<Value> {
        Ok(Value::Object(Vec::new()))
    }
}

impl Deserialize for () {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Object(members) => {
                if !members.is_empty() {
                    return Err(Error::unsupported(format!(
                        "Expected empty tuple object, got {} members",
                        members.len()
                    )));
                }

                Ok(())
            }
            other => Err(Error::shape(format!(
                "Expected object for tuple, found {}",
                other.kind_name()
            ))),
        }
    }
}

impl_for_tuple!((T1, "Item1"));
impl_for_tuple!((T1, "Item1"), (T2, "Item2"));
impl_for_tuple!((T1, "Item1"), (T2, "Item2"), (T3, "Item3"));
impl_for_tuple!((T1, "Item1"), (T2, "Item2"), (T3, "Item3"), (T4, "Item4"));
impl_for_tuple!(
    (T1, "Item1"),
    (T2, "Item2"),
    (T3, "Item3"),
    (T4, "Item4"),
    (T5, "Item5")
);
impl_for_tuple!(
    (T1, "Item1"),
    (T2, "Item2"),
    (T3, "Item3"),
    (T4, "Item4"),
    (T5, "Item5"),
    (T6, "Item6")
);
impl_for_tuple!(
    (T1, "Item1"),
    (T2, "Item2"),
    (T3, "Item3"),
    (T4, "Item4"),
    (T5, "Item5"),
    (T6, "Item6"),
    (T7, "Item7")
);
impl_for_tuple!(
    (T1, "Item1"),
    (T2, "Item2"),
    (T3, "Item3"),
    (T4, "Item4"),
    (T5, "Item5"),
    (T6, "Item6"),
    (T7, "Item7"),
    (T8, "Item8")
);
impl_for_tuple!(
    (T1, "Item1"),
    (T2, "Item2"),
    (T3, "Item3"),
    (T4, "Item4"),
    (T5, "Item5"),
    (T6, "Item6"),
    (T7, "Item7"),
    (T8, "Item8"),
    (T9, "Item9")
);
impl_for_tuple!(
    (T1, "Item1"),
    (T2, "Item2"),
    (T3, "Item3"),
    (T4, "Item4"),
    (T5, "Item5"),
    (T6, "Item6"),
    (T7, "Item7"),
    (T8, "Item8"),
    (T9, "Item9"),
    (T10, "Item10")
);
impl_for_tuple!(
    (T1, "Item1"),
    (T2, "Item2"),
    (T3, "Item3"),
    (T4, "Item4"),
    (T5, "Item5"),
    (T6, "Item6"),
    (T7, "Item7"),
    (T8, "Item8"),
    (T9, "Item9"),
    (T10, "Item10"),
    (T11, "Item11")
);
impl_for_tuple!(
    (T1, "Item1"),
    (T2, "Item2"),
    (T3, "Item3"),
    (T4, "Item4"),
    (T5, "Item5"),
    (T6, "Item6"),
    (T7, "Item7"),
    (T8, "Item8"),
    (T9, "Item9"),
    (T10, "Item10"),
    (T11, "Item11"),
    (T12, "Item12")
);

// ------------------------------ BTreeMap -------------------------------- //

impl<K: MapKey, V: Serialize> Serialize for BTreeMap<K, V> {
    fn serialize(&self) -> Result<Value> {
        let mut members = Vec::with_capacity(self.len());

        for (key, value) in self {
            members.push((key.to_text(), value.serialize()?));
        }

        Ok(Value::Object(members))
    }
}

impl<K: MapKey + Ord, V: Deserialize> Deserialize for BTreeMap<K, V> {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Object(members) => {
                let mut map = BTreeMap::new();

                for (key, value) in members {
                    map.insert(K::from_text(&key)?, V::deserialize(value)?);
                }

                Ok(map)
            }
            other => Err(Error::shape(format!(
                "Expected object for map, found {}",
                other.kind_name()
            ))),
        }
    }
}

// ------------------------------- HashMap -------------------------------- //

#[cfg(feature = "std")]
impl<K: MapKey, V: Serialize> Serialize for std::collections::HashMap<K, V> {
    fn serialize(&self) -> Result<Value> {
        let mut members = Vec::with_capacity(self.len());

        for (key, value) in self {
            members.push((key.to_text(), value.serialize()?));
        }

        Ok(Value::Object(members))
    }
}

#[cfg(feature = "std")]
impl<K: MapKey + core::hash::Hash + Eq, V: Deserialize> Deserialize
    for std::collections::HashMap<K, V>
{
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Object(members) => {
                let mut map = std::collections::HashMap::with_capacity(members.len());

                for (key, value) in members {
                    map.insert(K::from_text(&key)?, V::deserialize(value)?);
                }

                Ok(map)
            }
            other => Err(Error::shape(format!(
                "Expected object for map, found {}",
                other.kind_name()
            ))),
        }
    }
}

// ------------------------------- IndexMap ------------------------------- //

// Insertion-ordered map; members land on the wire and come back in the
// order they were inserted.

#[cfg(feature = "indexmap")]
impl<K: MapKey, V: Serialize> Serialize for indexmap::IndexMap<K, V> {
    fn serialize(&self) -> Result<Value> {
        let mut members = Vec::with_capacity(self.len());

        for (key, value) in self {
            members.push((key.to_text(), value.serialize()?));
        }

        Ok(Value::Object(members))
    }
}

#[cfg(feature = "indexmap")]
impl<K: MapKey + core::hash::Hash + Eq, V: Deserialize> Deserialize for indexmap::IndexMap<K, V> {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Object(members) => {
                let mut map = indexmap::IndexMap::with_capacity(members.len());

                for (key, value) in members {
                    map.insert(K::from_text(&key)?, V::deserialize(value)?);
                }

                Ok(map)
            }
            other => Err(Error::shape(format!(
                "Expected object for map, found {}",
                other.kind_name()
            ))),
        }
    }
}

// --------------------------------- Box ---------------------------------- //

impl<T: Serialize> Serialize for Box<T> {
    fn serialize(&self) -> Result<Value> {
        self.as_ref().serialize()
    }
}

impl<T: Deserialize> Deserialize for Box<T> {
    fn deserialize(value: Value) -> Result<Self> {
        Ok(Box::new(T::deserialize(value)?))
    }
}

// ------------------------------- Option --------------------------------- //

impl<T: Serialize> Serialize for Option<T> {
    fn serialize(&self) -> Result<Value> {
        match self {
            Some(value) => value.serialize(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: Deserialize> Deserialize for Option<T> {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::deserialize(value)?)),
        }
    }
}

// --------------------------------- Rc ----------------------------------- //

impl<T: Serialize> Serialize for Rc<T> {
    fn serialize(&self) -> Result<Value> {
        self.as_ref().serialize()
    }
}

impl<T: Deserialize> Deserialize for Rc<T> {
    fn deserialize(value: Value) -> Result<Self> {
        Ok(Rc::new(T::deserialize(value)?))
    }
}

// --------------------------------- Arc ---------------------------------- //

impl<T: Serialize> Serialize for Arc<T> {
    fn serialize(&self) -> Result<Value> {
        self.as_ref().serialize()
    }
}

impl<T: Deserialize> Deserialize for Arc<T> {
    fn deserialize(value: Value) -> Result<Self> {
        Ok(Arc::new(T::deserialize(value)?))
    }
}

// ------------------------------- Moment --------------------------------- //

// Calendar moments travel as `YYYY-MM-DDTHH:mm:ss.fff` with millisecond
// precision and no zone.

#[cfg(feature = "time")]
impl Serialize for time::PrimitiveDateTime {
    fn serialize(&self) -> Result<Value> {
        let format = time::macros::format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]"
        );
        let text = self
            .format(&format)
            .map_err(|e| Error::format(format!("Cannot format date-time: {}", e)))?;

        Ok(Value::Text(text))
    }
}

#[cfg(feature = "time")]
impl Deserialize for time::PrimitiveDateTime {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Text(text) => {
                let format = time::macros::format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]"
                );

                time::PrimitiveDateTime::parse(&text, &format).map_err(|e| {
                    Error::format(format!("Cannot parse `{}` as date-time: {}", text, e))
                })
            }
            other => Err(Error::shape(format!(
                "Expected date-time string, found {}",
                other.kind_name()
            ))),
        }
    }
}

// ------------------------------ Duration -------------------------------- //

// Durations travel as `[-][d.]HH:mm:ss[.fffffff]`: the day component
// appears only when nonzero and the fractional component counts 100 ns
// ticks, printed with all seven digits when present.

#[cfg(feature = "time")]
impl Serialize for time::Duration {
    fn serialize(&self) -> Result<Value> {
        let magnitude = self.abs();
        let days = magnitude.whole_days();
        let hours = magnitude.whole_hours() % 24;
        let minutes = magnitude.whole_minutes() % 60;
        let seconds = magnitude.whole_seconds() % 60;
        let ticks = magnitude.subsec_nanoseconds() / 100;

        let mut text = String::new();

        if self.is_negative() {
            text.push('-');
        }

        if days > 0 {
            text.push_str(&format!("{}.", days));
        }

        text.push_str(&format!("{:02}:{:02}:{:02}", hours, minutes, seconds));

        if ticks > 0 {
            text.push_str(&format!(".{:07}", ticks));
        }

        Ok(Value::Text(text))
    }
}

#[cfg(feature = "time")]
fn parse_duration(text: &str) -> Result<time::Duration> {
    let bad = || Error::format(format!("Cannot parse `{}` as duration", text));

    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut clock = rest.split(':');
    let (first, minutes_text, seconds_text) =
        match (clock.next(), clock.next(), clock.next(), clock.next()) {
            (Some(first), Some(minutes), Some(seconds), None) => (first, minutes, seconds),
            _ => return Err(bad()),
        };

    let (days, hours_text): (i64, &str) = match first.split_once('.') {
        Some((days, hours)) => (days.parse().map_err(|_| bad())?, hours),
        None => (0, first),
    };

    let (seconds_text, fraction) = match seconds_text.split_once('.') {
        Some((seconds, fraction)) => (seconds, fraction),
        None => (seconds_text, ""),
    };

    let hours: i64 = hours_text.parse().map_err(|_| bad())?;
    let minutes: i64 = minutes_text.parse().map_err(|_| bad())?;
    let seconds: i64 = seconds_text.parse().map_err(|_| bad())?;

    if days < 0 || !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(bad());
    }

    if !(0..60).contains(&seconds) {
        return Err(bad());
    }

    let ticks: i64 = if fraction.is_empty() {
        0
    } else {
        if fraction.len() > 7 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }

        // Scale partial fractions up to the full seven tick digits
        format!("{:0<7}", fraction).parse().map_err(|_| bad())?
    };

    let magnitude = time::Duration::days(days)
        + time::Duration::hours(hours)
        + time::Duration::minutes(minutes)
        + time::Duration::seconds(seconds)
        + time::Duration::nanoseconds(ticks * 100);

    if negative {
        return Ok(-magnitude);
    }

    Ok(magnitude)
}

#[cfg(feature = "time")]
impl Deserialize for time::Duration {
    fn deserialize(value: Value) -> Result<Self> {
        match value {
            Value::Text(text) => parse_duration(&text),
            other => Err(Error::shape(format!(
                "Expected duration string, found {}",
                other.kind_name()
            ))),
        }
    }
}

// -------------------------------- Value --------------------------------- //

// Identity impls so `Value` itself is a deserialization target: parsing
// into `Value` is the untyped entry point.

impl Serialize for Value {
    fn serialize(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl Deserialize for Value {
    fn deserialize(value: Value) -> Result<Self> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::ErrorKind;

    #[test]
    fn stack_kind_reverses_staging_and_others_do_not() {
        assert!(ContainerKind::LifoStack.reverses_staging());

        for kind in [
            ContainerKind::FixedArray,
            ContainerKind::MutableList,
            ContainerKind::GrowableCollection,
            ContainerKind::ObservableList,
            ContainerKind::ImmutableView,
            ContainerKind::LinkedSequence,
            ContainerKind::UniqueSet,
            ContainerKind::FifoQueue,
            ContainerKind::EnumerableFallback,
        ] {
            assert!(!kind.reverses_staging(), "{}", kind.label());
        }
    }

    #[test]
    fn two_phase_kinds_build_from_the_finished_buffer() {
        assert!(ContainerKind::FixedArray.builds_from_staging());
        assert!(ContainerKind::ImmutableView.builds_from_staging());
        assert!(ContainerKind::LifoStack.builds_from_staging());
        assert!(!ContainerKind::MutableList.builds_from_staging());
        assert!(!ContainerKind::FifoQueue.builds_from_staging());
    }

    #[test]
    fn staging_recurses_into_elements() {
        let wire = Value::Array(Vec::from([
            Value::Number("1".to_string()),
            Value::Number("2".to_string()),
            Value::Number("3".to_string()),
        ]));
        let staged: Vec<i32> = stage_sequence(wire, ContainerKind::MutableList).unwrap();

        assert_eq!(staged, [1, 2, 3]);
    }

    #[test]
    fn staging_a_non_array_is_a_shape_error() {
        let error = stage_sequence::<i32>(Value::Null, ContainerKind::FifoQueue).unwrap_err();

        assert_eq!(error.kind, ErrorKind::Shape);
    }

    #[test]
    fn integer_overflow_is_a_format_error() {
        let error = u8::deserialize(Value::Number("256".to_string())).unwrap_err();

        assert_eq!(error.kind, ErrorKind::Format);
    }

    #[test]
    fn float_sentinels_parse_back_to_specials() {
        assert!(f64::deserialize(Value::Text("NaN".to_string()))
            .unwrap()
            .is_nan());
        assert_eq!(
            f64::deserialize(Value::Text("Infinity".to_string())).unwrap(),
            f64::INFINITY
        );
        assert_eq!(
            f32::deserialize(Value::Text("-Infinity".to_string())).unwrap(),
            f32::NEG_INFINITY
        );
    }

    #[test]
    fn exponent_forms_reconstruct() {
        assert_eq!(parse_f64_token("1.5e3").unwrap(), 1500.0);
        assert_eq!(parse_f64_token("2E-2").unwrap(), 0.02);
        assert_eq!(
            parse_scientific("1e2e3").unwrap_err().kind,
            ErrorKind::Format
        );
    }

    #[cfg(feature = "time")]
    #[test]
    fn duration_round_trips_through_the_canonical_form() {
        let duration = time::Duration::days(5)
            + time::Duration::hours(11)
            + time::Duration::minutes(18)
            + time::Duration::seconds(32)
            + time::Duration::milliseconds(512);
        let wire = duration.serialize().unwrap();

        assert_eq!(wire, Value::Text("5.11:18:32.5120000".to_string()));
        assert_eq!(time::Duration::deserialize(wire).unwrap(), duration);

        let short = time::Duration::hours(1) + time::Duration::minutes(2)
            + time::Duration::seconds(3);

        assert_eq!(short.serialize().unwrap(), Value::Text("01:02:03".to_string()));
        assert_eq!(parse_duration("01:02:03").unwrap(), short);
        assert_eq!(parse_duration("-01:02:03").unwrap(), -short);
        assert_eq!(parse_duration("26:00:00").unwrap_err().kind, ErrorKind::Format);
    }
}
