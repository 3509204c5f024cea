use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::{spanned::Spanned, *};

/// Arguments of the block-level attribute: `#[dybind(wrapper = <ident>, vis = "<vis>")]`.
pub struct AttrData {
	pub wrapper: Ident,
	pub vis: Visibility,
}

impl TryFrom<Punctuated<Expr, Token!(,)>> for AttrData {
	type Error = syn::Error;
	fn try_from(value: Punctuated<Expr, Token!(,)>) -> Result<Self> {
		let mut wrapper: Option<Ident> = None;
		let mut vis: Option<Visibility> = None;
		let mut errors = vec![];
		const EXPECTED_KW: &str = "Expected `wrapper`, or `vis`.";

		for expr in value.iter() {
			match expr {
				Expr::Assign(assign) => {
					let (assign_left, assign_right) = (assign.left.as_ref(), assign.right.as_ref());

					let Expr::Path(ExprPath { path, .. }) = assign_left else {
						errors.push(Error::new(assign_left.span(), EXPECTED_KW));
						continue;
					};
					if path.is_ident("wrapper") {
						// Branch for syntax: #[dybind(wrapper = <ident>)]
						match assign_right {
							Expr::Path(ExprPath { path, .. }) if path.get_ident().is_some() => {
								if wrapper.is_none() {
									wrapper = path.get_ident().cloned();
								} else {
									errors.push(Error::new(
										assign.span(),
										"wrapper is already defined",
									));
								}
							}
							right => errors.push(Error::new(right.span(), "Expected identifier.")),
						}
					} else if path.is_ident("vis") {
						// Branch for syntax: #[dybind(vis = "<vis>")]
						match assign_right {
							Expr::Lit(ExprLit {
								lit: Lit::Str(val), ..
							}) => {
								if vis.is_none() {
									match val.parse::<Visibility>() {
										Ok(parsed) => vis = Some(parsed),
										Err(_) => errors.push(Error::new(
											val.span(),
											"Expected a visibility, such as \"pub\".",
										)),
									}
								} else {
									errors.push(Error::new(assign.span(), "vis is already defined"));
								}
							}
							right => errors.push(Error::new(right.span(), "Expected string.")),
						}
					} else {
						errors.push(Error::new(assign_left.span(), EXPECTED_KW));
					}
				}

				// Branch for everything else.
				expr => errors.push(Error::new(expr.span(), EXPECTED_KW)),
			}
		}
		if wrapper.is_none() {
			errors.push(Error::new(
				value.span(),
				"No wrapper detected. Suggest using: `wrapper = <ident>`.",
			));
		}

		// if there are any errors this will immediately combine and return early.
		if let Some(mut main_err) = errors.pop() {
			for err in errors {
				main_err.combine(err);
			}
			Err(main_err)
		} else {
			Ok(Self {
				wrapper: wrapper.unwrap(),
				vis: vis.unwrap_or(Visibility::Inherited),
			})
		}
	}
}

/// Arguments of the per-function attribute:
/// `#[dybind(optional)]` and `#[dybind(link_name = "<name>")]`.
pub struct ItemAttr {
	pub optional: bool,
	pub link_name: Option<(String, Span)>,
	/// Attributes that are not ours, forwarded onto the generated method.
	pub passthrough: Vec<Attribute>,
}

impl ItemAttr {
	pub fn parse(attrs: &[Attribute]) -> Result<Self> {
		let mut optional = false;
		let mut link_name: Option<(String, Span)> = None;
		let mut passthrough = vec![];
		let mut errors = vec![];
		const EXPECTED_KW: &str = "Expected `optional`, or `link_name = <string>`.";

		for attr in attrs {
			if !attr.path().is_ident("dybind") {
				passthrough.push(attr.clone());
				continue;
			}
			let punct = match attr
				.parse_args_with(Punctuated::<Expr, Token!(,)>::parse_separated_nonempty)
			{
				Ok(punct) => punct,
				Err(err) => {
					errors.push(err);
					continue;
				}
			};
			for expr in punct.iter() {
				match expr {
					Expr::Path(ExprPath { path, .. }) if path.is_ident("optional") => {
						optional = true;
					}
					Expr::Assign(assign) => {
						let (assign_left, assign_right) =
							(assign.left.as_ref(), assign.right.as_ref());
						let Expr::Path(ExprPath { path, .. }) = assign_left else {
							errors.push(Error::new(assign_left.span(), EXPECTED_KW));
							continue;
						};
						if path.is_ident("link_name") {
							match assign_right {
								Expr::Lit(ExprLit {
									lit: Lit::Str(val), ..
								}) => {
									if link_name.is_none() {
										link_name = Some((val.value(), assign.span()));
									} else {
										errors.push(Error::new(
											assign.span(),
											"link_name is already defined",
										));
									}
								}
								right => {
									errors.push(Error::new(right.span(), "Expected string."));
								}
							}
						} else {
							errors.push(Error::new(assign_left.span(), EXPECTED_KW));
						}
					}
					expr => errors.push(Error::new(expr.span(), EXPECTED_KW)),
				}
			}
		}

		if let Some(mut main_err) = errors.pop() {
			for err in errors {
				main_err.combine(err);
			}
			Err(main_err)
		} else {
			Ok(Self {
				optional,
				link_name,
				passthrough,
			})
		}
	}
}
