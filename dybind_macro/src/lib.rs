// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use quote::*;

use proc_macro::TokenStream as TokenStream1;
use proc_macro2::TokenStream as TokenStream2;
use syn::{parse::Parser, punctuated::Punctuated, spanned::Spanned, Expr, Token};

mod attr_data;
use attr_data::*;

/// Generates a typed wrapper struct over an `extern` block.
///
/// The generated struct owns a `dybind::Library` and one function pointer
/// per declaration, bound eagerly when `open` is called. Declarations
/// marked `#[dybind(optional)]` are probed instead of required, and
/// `#[dybind(link_name = "...")]` overrides the exported name.
#[proc_macro_attribute]
pub fn dybind(args: TokenStream1, input: TokenStream1) -> TokenStream1 {
	let args = TokenStream2::from(args);
	let input = TokenStream2::from(input);
	let foreign_mod = match syn::parse2::<syn::ItemForeignMod>(input) {
		Ok(item) => item,
		Err(e) => return syn::Error::into_compile_error(e).into(),
	};

	let punct = match Parser::parse2(
		Punctuated::<Expr, Token!(,)>::parse_separated_nonempty,
		args,
	) {
		Ok(punct) => punct,
		Err(e) => return syn::Error::into_compile_error(e).into(),
	};
	let attr = match AttrData::try_from(punct) {
		Ok(attr) => attr,
		Err(e) => return syn::Error::into_compile_error(e).into(),
	};

	match expand_wrapper(foreign_mod, &attr) {
		Ok(tokens) => TokenStream1::from(tokens),
		Err(e) => syn::Error::into_compile_error(e).into(),
	}
}

struct BoundFn {
	field: TokenStream2,
	init: TokenStream2,
	method: TokenStream2,
	name: syn::Ident,
}

fn expand_wrapper(foreign_mod: syn::ItemForeignMod, attr: &AttrData) -> syn::Result<TokenStream2> {
	let syn::ItemForeignMod { abi, items, .. } = foreign_mod;
	let wrapper = &attr.wrapper;
	let vis = &attr.vis;

	let mut bound = Vec::new();
	for item in items {
		use syn::ForeignItem;
		match item {
			ForeignItem::Fn(fn_item) => bound.push(parse_fn(&abi, fn_item)?),
			other => {
				return Err(syn::Error::new(
					other.span(),
					"only functions can be bound by `dybind`",
				))
			}
		}
	}

	let fields = bound.iter().map(|b| &b.field);
	let inits = bound.iter().map(|b| &b.init);
	let methods = bound.iter().map(|b| &b.method);
	let names = bound.iter().map(|b| &b.name);

	Ok(quote! {
		#[derive(Debug)]
		#vis struct #wrapper {
			lib: dybind::Library,
			#(#fields),*
		}

		impl #wrapper {
			/// Opens the library at `path` and binds every declared symbol.
			///
			/// # Safety
			/// The declared signatures must match the exported procedures of
			/// the library behind `path`.
			pub unsafe fn open<P: ::std::convert::AsRef<::std::path::Path>>(
				path: P,
			) -> dybind::Result<Self> {
				let lib = dybind::Library::open(path)?;
				#(#inits)*
				Ok(Self { lib, #(#names),* })
			}

			/// The owned library handle.
			pub fn library(&self) -> &dybind::Library {
				&self.lib
			}

			#(#methods)*
		}
	})
}

fn parse_fn(abi: &syn::Abi, fn_item: syn::ForeignItemFn) -> syn::Result<BoundFn> {
	let sig = &fn_item.sig;
	if let Some(variadic) = &sig.variadic {
		return Err(syn::Error::new(
			variadic.span(),
			"variadic functions are unsupported",
		));
	}
	let item_attr = ItemAttr::parse(&fn_item.attrs)?;

	let fn_name = &sig.ident;
	let vis = &fn_item.vis;
	let output = &sig.output;
	let params_default = sig.inputs.to_token_stream();
	let fn_attrs = &item_attr.passthrough;

	let mut param_list = Vec::new();
	let mut param_ty_list = Vec::new();
	for (i, arg) in sig.inputs.iter().enumerate() {
		match arg {
			syn::FnArg::Typed(pat_type) => {
				let ty = pat_type.ty.to_token_stream();
				let param_name = match pat_type.pat.as_ref() {
					syn::Pat::Wild(_) => format!("p{i}").parse::<TokenStream2>().unwrap(),
					syn::Pat::Ident(pat_id) => pat_id.ident.to_token_stream(),
					pat => {
						return Err(syn::Error::new(pat.span(), "unsupported argument pattern"))
					}
				};
				param_list.push(param_name.clone());
				param_ty_list.push(quote!(#param_name : #ty));
			}
			syn::FnArg::Receiver(rec) => {
				return Err(syn::Error::new(rec.span(), "`self` arguments are unsupported"));
			}
		}
	}

	// According to "The Rustonomicon" foreign functions are assumed unsafe,
	// so the generated methods are prepended with `unsafe`.
	let fn_ty = quote!(unsafe #abi fn (#params_default) #output);
	let link_name = match &item_attr.link_name {
		Some((name, _)) => name.clone(),
		None => fn_name.to_string(),
	};

	let (field, init, method);
	if item_attr.optional {
		let ret = match output {
			syn::ReturnType::Default => quote!(()),
			syn::ReturnType::Type(_, ty) => ty.to_token_stream(),
		};
		field = quote!(#fn_name: ::std::option::Option<#fn_ty>);
		init = quote!(let #fn_name = unsafe { lib.try_bind::<#fn_ty>(#link_name) };);
		method = quote! {
			#(#fn_attrs)*
			#vis unsafe fn #fn_name(&self, #(#param_ty_list),*) -> ::std::option::Option<#ret> {
				self.#fn_name.map(|f| unsafe { f(#(#param_list),*) })
			}
		};
	} else {
		field = quote!(#fn_name: #fn_ty);
		init = quote!(let #fn_name = unsafe { lib.bind::<#fn_ty>(#link_name)? };);
		method = quote! {
			#(#fn_attrs)*
			#vis unsafe fn #fn_name(&self, #(#param_ty_list),*) #output {
				(self.#fn_name)(#(#param_list),*)
			}
		};
	}

	Ok(BoundFn {
		field,
		init,
		method,
		name: fn_name.clone(),
	})
}
