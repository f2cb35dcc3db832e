pub const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{% block title %}Invoices{% endblock title %} | Dashboard</title>
</head>
<body>
  <main>
  {% block content %}{% endblock content %}
  </main>
</body>
</html>
"#;

pub const INVOICE_LIST: &str = r#"{% extends "layout.html" %}
{% block title %}Invoices{% endblock title %}
{% block content %}
<h1>Invoices</h1>
<a href="/dashboard/invoices/create">Create Invoice</a>
{% if message %}<p aria-live="polite" class="text-sm text-red-500">{{ message }}</p>{% endif %}
<table>
  <thead>
    <tr><th>Customer</th><th>Amount</th><th>Date</th><th>Status</th><th></th></tr>
  </thead>
  <tbody>
  {% for invoice in invoices %}
    <tr>
      <td>{{ invoice.customer }}</td>
      <td>{{ invoice.amount }}</td>
      <td>{{ invoice.date }}</td>
      <td>{{ invoice.status }}</td>
      <td>
        <a href="/dashboard/invoices/{{ invoice.id }}/edit">Edit</a>
        <form method="post" action="/dashboard/invoices/{{ invoice.id }}/delete">
          <button type="submit">Delete</button>
        </form>
      </td>
    </tr>
  {% endfor %}
  {% if invoices | length == 0 %}
    <tr><td colspan="5">No invoices.</td></tr>
  {% endif %}
  </tbody>
</table>
{% endblock content %}
"#;

pub const INVOICE_FORM: &str = r#"{% extends "layout.html" %}
{% block title %}{{ title }}{% endblock title %}
{% block content %}
<h1>{{ title }}</h1>
<form method="post" action="{{ action }}">
  <label for="customer">Choose customer</label>
  <select id="customer" name="customer-id" aria-describedby="customer-error">
    <option value="" disabled{% if not values.customer_id %} selected{% endif %}>Select a customer</option>
    {% for customer in customers %}
    <option value="{{ customer.id }}"{% if customer.id == values.customer_id %} selected{% endif %}>{{ customer.name }}</option>
    {% endfor %}
  </select>
  {{ customer_error | safe }}

  <label for="amount">Choose an amount</label>
  <input id="amount" name="amount" type="number" step="0.01" placeholder="Enter USD amount"
         value="{{ values.amount }}" aria-describedby="amount-error">
  {{ amount_error | safe }}

  <fieldset aria-describedby="status-error">
    <legend>Set the invoice status</legend>
    <input id="pending" name="status" type="radio" value="pending"{% if values.status == "pending" %} checked{% endif %}>
    <label for="pending">Pending</label>
    <input id="paid" name="status" type="radio" value="paid"{% if values.status == "paid" %} checked{% endif %}>
    <label for="paid">Paid</label>
  </fieldset>
  {{ status_error | safe }}

  {% if message %}<div aria-live="polite" aria-atomic="true"><p class="mt-2 text-sm text-red-500">{{ message }}</p></div>{% endif %}

  <a href="/dashboard/invoices">Cancel</a>
  <button type="submit">{{ submit_label }}</button>
</form>
{% endblock content %}
"#;
