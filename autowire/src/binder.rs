//! Matching supplied arguments against a parameter list.

use crate::args::{Object, Vars};
use crate::container::Container;
use crate::error::{Error, Result};
use crate::reflect::{Param, ParamKind};
use tracing::trace;

/// Produces one value per parameter, in declaration order.
///
/// For each parameter the first matching rule wins:
///
/// 1. An object parameter takes the front value of `vars` if its type accepts it
///    (removing it), otherwise it is autowired with `container.make(type)`.
/// 2. In positional mode a value parameter takes the next remaining value.
/// 3. In named mode a value parameter takes `vars[name]`, leaving it in place.
/// 4. The parameter's default.
/// 5. Otherwise the call fails with [`Error::MissingArgument`].
///
/// The mode comes from the shape of `vars` and holds for the whole call.
pub(crate) fn bind_params(container: &Container, params: &[Param], mut vars: Vars) -> Result<Vec<Object>> {
  if params.is_empty() {
    return Ok(Vec::new());
  }

  let named = vars.is_named();
  let mut args = Vec::with_capacity(params.len());

  for param in params {
    let value = match param.kind() {
      ParamKind::Object { type_id, accepts } => {
        if vars.front().is_some_and(|front| accepts(front)) {
          trace!(param = param.name(), "taking supplied object");
          vars.pop_front()
        } else {
          trace!(param = param.name(), type_id = %type_id, "autowiring");
          Some(container.make(type_id, Vars::new())?)
        }
      }
      ParamKind::Value if !named => vars.pop_front(),
      ParamKind::Value => vars.get(param.name()).cloned(),
    };

    let value = match value.or_else(|| param.default().cloned()) {
      Some(value) => value,
      None => return Err(Error::MissingArgument(param.name().to_owned())),
    };
    args.push(value);
  }

  Ok(args)
}
